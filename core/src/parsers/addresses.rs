//! `ip -br addr show`
//!
//! Every field after the state column is an address. An interface without
//! addresses only has two fields and produces no binding.

use netaudit_common::models::AddressBinding;

use super::LineParser;

pub struct AddressParser;

impl LineParser for AddressParser {
    type Record = AddressBinding;
    const MIN_FIELDS: usize = 3;

    fn parse_line(_line: &str, fields: &[&str], records: &mut Vec<AddressBinding>) {
        let interface = fields[0];
        records.extend(
            fields[2..]
                .iter()
                .map(|address| AddressBinding::new(interface, *address)),
        );
    }
}
