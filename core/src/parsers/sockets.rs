//! `ss -tuln`
//!
//! ```text
//! Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port Process
//! udp   UNCONN 0      0      127.0.0.53%lo:53   0.0.0.0:*
//! tcp   LISTEN 0      4096   0.0.0.0:22         0.0.0.0:*
//! ```

use netaudit_common::models::SocketListener;

use super::LineParser;

pub struct SocketParser;

impl LineParser for SocketParser {
    type Record = SocketListener;
    const MIN_FIELDS: usize = 5;
    const HEADER_LINES: usize = 1;

    fn parse_line(_line: &str, fields: &[&str], records: &mut Vec<SocketListener>) {
        records.push(SocketListener {
            protocol: fields[0].to_string(),
            state: fields[1].to_string(),
            local: fields[4].to_string(),
            remote: fields.get(5).map(|remote| remote.to_string()),
        });
    }
}
