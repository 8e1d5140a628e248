//! # Section Parsers
//!
//! Turn the raw text of one command into typed records.
//!
//! All parsers share the same tolerance policy, implemented once in
//! [`LineParser::parse`]:
//! * input is split on line boundaries, after skipping `HEADER_LINES`;
//! * lines with fewer than `MIN_FIELDS` whitespace-delimited fields are dropped;
//! * a line that still cannot be read is dropped as well, never failing the parse;
//! * empty input yields no records.

pub mod addresses;
pub mod firewall;
pub mod interfaces;
pub mod networks;
pub mod routes;
pub mod sockets;

pub use addresses::AddressParser;
pub use firewall::FirewallParser;
pub use interfaces::InterfaceParser;
pub use networks::NetworkNameParser;
pub use routes::RouteParser;
pub use sockets::SocketParser;

pub trait LineParser {
    type Record;

    /// Fewest whitespace-delimited fields a line needs to be considered.
    const MIN_FIELDS: usize;

    /// Lines skipped unconditionally at the start of the input.
    const HEADER_LINES: usize = 0;

    /// Pre-filter on the raw line, applied before field splitting.
    fn accepts(_line: &str) -> bool {
        true
    }

    /// Extracts the records of one line. Pushing nothing marks the line as malformed.
    fn parse_line(line: &str, fields: &[&str], records: &mut Vec<Self::Record>);

    fn parse(raw: &str) -> Vec<Self::Record> {
        let mut records = Vec::new();
        for line in raw.lines().skip(Self::HEADER_LINES) {
            if !Self::accepts(line) {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < Self::MIN_FIELDS {
                continue;
            }
            Self::parse_line(line, &fields, &mut records);
        }
        records
    }
}
