//! `docker network ls`
//!
//! ```text
//! NETWORK ID     NAME      DRIVER    SCOPE
//! 9f2d1c3b4a5e   bridge    bridge    local
//! ```

use super::LineParser;

/// Extracts network names from the enumeration listing.
pub struct NetworkNameParser;

impl LineParser for NetworkNameParser {
    type Record = String;
    const MIN_FIELDS: usize = 4;
    const HEADER_LINES: usize = 1;

    fn parse_line(_line: &str, fields: &[&str], records: &mut Vec<String>) {
        records.push(fields[1].to_string());
    }
}
