use serde::Deserialize;
use std::collections::HashMap;

/// One data row of the lookup file: `port,protocol,tag`.
#[derive(Deserialize, Debug, Clone)]
pub struct LookupRow {
    pub dstport: u32,
    pub protocol: String,
    pub tag: String,
}

/// Mapping from (destination port, lowercase protocol name) to tag. Built
/// once per run and read-only afterward. Tag content is unrestricted: it may
/// be empty, repeat across keys, or contain internal whitespace.
#[derive(Debug, Default)]
pub struct LookupTable {
    entries: HashMap<(u32, String), String>,
}

impl LookupTable {
    /// Inserts a row, lowercasing its protocol name. A later row with the
    /// same key overwrites an earlier one.
    pub fn insert(&mut self, row: LookupRow) {
        self.entries
            .insert((row.dstport, row.protocol.to_lowercase()), row.tag);
    }

    pub fn tag(&self, dst_port: u32, protocol: &str) -> Option<&str> {
        self.entries
            .get(&(dst_port, protocol.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
