use std::fmt;

/// The protocols the classifier can name. Flow logs carry IANA protocol
/// numbers; everything outside this set maps to `Unknown`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Tcp,
    Udp,
    Icmp,
    Unknown,
}

impl Protocol {
    /// Maps a protocol number field to a protocol. The match is on the raw
    /// string, so `"06"` is not `"6"` and maps to `Unknown`.
    pub fn from_number(protocol_number: &str) -> Self {
        match protocol_number {
            "6" => Protocol::Tcp,
            "17" => Protocol::Udp,
            "1" => Protocol::Icmp,
            _ => Protocol::Unknown,
        }
    }

    /// Lowercase protocol name as it appears in lookup keys and the report.
    pub fn name(self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
            Protocol::Icmp => "icmp",
            Protocol::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_protocol_numbers() {
        assert_eq!(Protocol::from_number("6"), Protocol::Tcp);
        assert_eq!(Protocol::from_number("17"), Protocol::Udp);
        assert_eq!(Protocol::from_number("1"), Protocol::Icmp);
    }

    #[test]
    fn everything_else_is_unknown() {
        for number in &["99", "132", "abc", "", "06", "-6", " 6"] {
            assert_eq!(Protocol::from_number(number), Protocol::Unknown);
        }
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(Protocol::Tcp.name(), "tcp");
        assert_eq!(Protocol::Udp.name(), "udp");
        assert_eq!(Protocol::Icmp.name(), "icmp");
        assert_eq!(Protocol::Unknown.to_string(), "unknown");
    }
}
