#![forbid(unsafe_code)]

mod lookup;
mod protocol;
mod record;
mod summary;

use anyhow::Result;
use csv::{ReaderBuilder, Trim};
pub use lookup::{LookupRow, LookupTable};
pub use protocol::Protocol;
pub use record::{FlowLineError, FlowRecord, DST_PORT_FIELD, MIN_FIELDS, PROTOCOL_FIELD};
use std::io::{BufRead, BufReader, Read, Write};
pub use summary::{CountTable, FlowSummary, PortProtocolCounts, TagCounts, UNTAGGED};

/// Number of fields in a well-formed lookup row: port, protocol, tag.
const LOOKUP_ROW_FIELDS: usize = 3;

/// Reads the lookup file into a table. The first record is a header and is
/// skipped without validation. A row with a field count other than three is
/// dropped silently; a row whose port is not an integer is dropped with a
/// diagnostic on the log channel. Only wire-level CSV failures abort.
pub fn load_lookup_table(input: &mut impl Read) -> Result<LookupTable> {
    let mut table = LookupTable::default();
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);
    for record in reader.records() {
        let record = record?;
        if record.len() != LOOKUP_ROW_FIELDS {
            continue;
        }
        match record.deserialize::<LookupRow>(None) {
            Ok(row) => table.insert(row),
            Err(error) => {
                log::warn!("Skipping invalid row in lookup table {:?}: {}", record, error);
            }
        }
    }
    Ok(table)
}

/// Classifies every line of the flow log against the lookup table. A
/// malformed line is skipped with a diagnostic and touches no counter; read
/// failures abort.
pub fn process_flow_logs(input: &mut impl Read, lookup: &LookupTable) -> Result<FlowSummary> {
    let mut summary = FlowSummary::default();
    for line in BufReader::new(input).lines() {
        let line = line?;
        match FlowRecord::parse(&line) {
            Ok(record) => summary.apply(&record, lookup),
            Err(error) => {
                log::warn!("Skipping invalid line {:?}: {}. Continuing.", line, error);
            }
        }
    }
    Ok(summary)
}

/// Writes the two-section summary report. Entry order mirrors the first-seen
/// order of aggregation; nothing is sorted. The untagged line is emitted
/// even when its count is zero.
pub fn write_results(output: &mut impl Write, summary: &FlowSummary) -> Result<()> {
    writeln!(output, "Tag Counts:")?;
    writeln!(output, "Tag,Count")?;
    for (tag, count) in summary.tag_counts.iter() {
        writeln!(output, "{},{}", tag, count)?;
    }
    writeln!(output, "Untagged,{}", summary.untagged)?;
    writeln!(output)?;
    writeln!(output, "Port/Protocol Combination Counts:")?;
    writeln!(output, "Port,Protocol,Count")?;
    for ((port, protocol), count) in summary.port_protocol_counts.iter() {
        writeln!(output, "{},{},{}", port, protocol, count)?;
    }
    Ok(())
}
