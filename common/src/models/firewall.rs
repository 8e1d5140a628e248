/// A numbered firewall rule. `index` is the number printed by the firewall tool,
/// not the position in the parsed sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirewallRule {
    pub index: u32,
    pub text: String,
}

impl FirewallRule {
    pub fn new(index: u32, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}
