//! `ip route show`. Lines are kept whole; only blank lines are dropped.

use netaudit_common::models::RouteEntry;

use super::LineParser;

pub struct RouteParser;

impl LineParser for RouteParser {
    type Record = RouteEntry;
    const MIN_FIELDS: usize = 1;

    fn parse_line(line: &str, _fields: &[&str], records: &mut Vec<RouteEntry>) {
        records.push(RouteEntry::new(line.trim()));
    }
}
