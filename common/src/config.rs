use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_FIREWALL_TOOL: &str = "ufw";
pub const DEFAULT_TOPOLOGY_TOOL: &str = "docker";

#[derive(Debug, Clone)]
pub struct Config {
    /// Firewall frontend queried through `sudo -S <tool> status numbered`.
    pub firewall_tool: String,

    /// Container runtime whose networks are enumerated and inspected.
    pub topology_tool: String,

    /// Upper bound for a single external command.
    ///
    /// `None` lets every command run to completion.
    pub command_timeout: Option<Duration>,

    /// Directory holding the rotating audit log.
    pub log_dir: PathBuf,

    pub no_banner: bool,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            firewall_tool: DEFAULT_FIREWALL_TOOL.to_string(),
            topology_tool: DEFAULT_TOPOLOGY_TOOL.to_string(),
            command_timeout: None,
            log_dir: PathBuf::from("."),
            no_banner: false,
            quiet: 0,
        }
    }
}
