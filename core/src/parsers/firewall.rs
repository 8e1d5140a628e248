//! `ufw status numbered`
//!
//! ```text
//! Status: active
//!
//!      To                         Action      From
//!      --                         ------      ----
//! [ 1] 22/tcp                     ALLOW IN    Anywhere
//! ```
//!
//! Only lines starting with the `[` numbering marker are rules.

use netaudit_common::models::FirewallRule;

use super::LineParser;

pub struct FirewallParser;

impl LineParser for FirewallParser {
    type Record = FirewallRule;
    const MIN_FIELDS: usize = 1;

    fn accepts(line: &str) -> bool {
        line.starts_with('[')
    }

    fn parse_line(line: &str, _fields: &[&str], records: &mut Vec<FirewallRule>) {
        let Some((number, text)) = line[1..].split_once(']') else {
            return;
        };
        if let Ok(index) = number.trim().parse::<u32>() {
            records.push(FirewallRule::new(index, text.trim()));
        }
    }
}
