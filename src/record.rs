use std::num::ParseIntError;
use thiserror::Error;

/// 0-indexed position of the destination port in a flow log line.
pub const DST_PORT_FIELD: usize = 5;

/// 0-indexed position of the protocol number in a flow log line.
pub const PROTOCOL_FIELD: usize = 7;

/// A line needs at least this many fields to carry both of the above.
pub const MIN_FIELDS: usize = PROTOCOL_FIELD + 1;

/// One parsed flow log line. Only the destination port and the protocol
/// number are kept; every other field is opaque and ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub dst_port: u32,
    pub protocol_number: String,
}

impl FlowRecord {
    /// Splits a line on runs of whitespace and extracts the two fields of
    /// interest. Flow logs are not CSV; there are no quoting semantics.
    pub fn parse(line: &str) -> Result<Self, FlowLineError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return Err(FlowLineError::TooFewFields(fields.len()));
        }
        let dst_port = fields[DST_PORT_FIELD].parse().map_err(|source| {
            FlowLineError::InvalidPort {
                field: fields[DST_PORT_FIELD].to_string(),
                source,
            }
        })?;
        Ok(FlowRecord {
            dst_port,
            protocol_number: fields[PROTOCOL_FIELD].to_string(),
        })
    }
}

#[derive(Error, Debug)]
pub enum FlowLineError {
    #[error("expected at least {} fields, found {0}", MIN_FIELDS)]
    TooFewFields(usize),

    #[error("invalid destination port {field:?}")]
    InvalidPort {
        field: String,
        #[source]
        source: ParseIntError,
    },
}
