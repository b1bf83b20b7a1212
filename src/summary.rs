use crate::{lookup::LookupTable, protocol::Protocol, record::FlowRecord};
use std::collections::HashMap;
use std::hash::Hash;

/// Tag a record resolves to when its (port, protocol) pair has no lookup
/// entry. A lookup row that names this tag literally is routed to the
/// untagged count as well.
pub const UNTAGGED: &str = "unknown";

/// Insert-or-increment counter that iterates in first-insertion order: a
/// lookup map pointing into a list of entries.
#[derive(Debug)]
pub struct CountTable<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
}

impl<K> Default for CountTable<K> {
    fn default() -> Self {
        CountTable {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> CountTable<K> {
    pub fn increment(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for a key, zero if it was never incremented.
    pub fn count(&self, key: &K) -> u64 {
        self.index.get(key).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Entries in the order their keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type TagCounts = CountTable<String>;
pub type PortProtocolCounts = CountTable<(u32, Protocol)>;

/// Aggregation state for one run over a flow log.
#[derive(Debug, Default)]
pub struct FlowSummary {
    pub tag_counts: TagCounts,
    pub port_protocol_counts: PortProtocolCounts,
    pub untagged: u64,
}

impl FlowSummary {
    /// Applies one parsed record: resolves its tag and moves exactly one of
    /// the tag counters, then the port/protocol counter unconditionally.
    pub fn apply(&mut self, record: &FlowRecord, lookup: &LookupTable) {
        let protocol = Protocol::from_number(&record.protocol_number);
        let tag = lookup
            .tag(record.dst_port, protocol.name())
            .unwrap_or(UNTAGGED);
        if tag == UNTAGGED {
            self.untagged += 1;
        } else {
            self.tag_counts.increment(tag.to_string());
        }
        self.port_protocol_counts
            .increment((record.dst_port, protocol));
    }
}
