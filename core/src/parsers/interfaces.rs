//! `ip -br link show`
//!
//! ```text
//! lo               UNKNOWN        00:00:00:00:00:00 <LOOPBACK,UP,LOWER_UP>
//! enp9s0           UP             3c:7c:3f:aa:bb:cc <BROADCAST,MULTICAST,UP,LOWER_UP>
//! ```

use netaudit_common::models::{Interface, LinkState};

use super::LineParser;

pub struct InterfaceParser;

impl LineParser for InterfaceParser {
    type Record = Interface;
    const MIN_FIELDS: usize = 2;

    fn parse_line(_line: &str, fields: &[&str], records: &mut Vec<Interface>) {
        records.push(Interface::new(fields[0], LinkState::from_token(fields[1])));
    }
}
