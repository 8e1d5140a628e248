pub mod audit;
pub mod menu;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use netaudit_common::config::{Config, DEFAULT_FIREWALL_TOOL, DEFAULT_TOPOLOGY_TOOL};

#[derive(Parser)]
#[command(name = "netaudit")]
#[command(about = "Audit the network configuration of this host.")]
#[command(version)]
pub struct CommandLine {
    /// Run every check and exit without showing the menu
    #[arg(short, long)]
    pub all: bool,

    /// Firewall frontend queried through sudo
    #[arg(long, value_name = "TOOL", default_value = DEFAULT_FIREWALL_TOOL)]
    pub firewall_tool: String,

    /// Container runtime whose networks are listed
    #[arg(long, value_name = "TOOL", default_value = DEFAULT_TOPOLOGY_TOOL)]
    pub topology_tool: String,

    /// Abort any single command after this many seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Directory for the rotating audit log
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub log_dir: PathBuf,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Print less. Repeat to keep only notices and the summary
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            firewall_tool: self.firewall_tool.clone(),
            topology_tool: self.topology_tool.clone(),
            command_timeout: self.timeout.map(Duration::from_secs),
            log_dir: self.log_dir.clone(),
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}
