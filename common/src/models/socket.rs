/// One line of `ss -tuln`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketListener {
    /// `tcp` or `udp`.
    pub protocol: String,
    /// `LISTEN`, `UNCONN`, `ESTAB`...
    pub state: String,
    pub local: String,
    /// Peer column. Absent when the line stops after the local address.
    pub remote: Option<String>,
}
