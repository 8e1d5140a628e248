//! The fixed argument vectors of every command the audit runs.
//!
//! Brief and numeric output modes are requested so the parsers can rely on
//! positional fields.

use secrecy::SecretString;

use crate::executor::CommandSpec;

/// Escalation program used for the firewall query.
pub const ESCALATION_PROGRAM: &str = "sudo";

pub fn link_show() -> CommandSpec {
    CommandSpec::new("ip").args(["-br", "link", "show"])
}

pub fn addr_show() -> CommandSpec {
    CommandSpec::new("ip").args(["-br", "addr", "show"])
}

pub fn route_show() -> CommandSpec {
    CommandSpec::new("ip").args(["route", "show"])
}

/// `sudo -S <tool> status numbered`. `-S` makes sudo read the credential from stdin.
pub fn firewall_status(tool: &str, credential: Option<SecretString>) -> CommandSpec {
    let spec = CommandSpec::new(ESCALATION_PROGRAM).args(["-S", tool, "status", "numbered"]);
    match credential {
        Some(credential) => spec.with_secret_input(credential),
        None => spec,
    }
}

pub fn socket_summary() -> CommandSpec {
    CommandSpec::new("ss").arg("-tuln")
}

pub fn network_ls(tool: &str) -> CommandSpec {
    CommandSpec::new(tool).args(["network", "ls"])
}

/// A single batched inspect call covering every enumerated network.
pub fn network_inspect(tool: &str, names: &[String]) -> CommandSpec {
    CommandSpec::new(tool)
        .args(["network", "inspect"])
        .args(names.iter().cloned())
}
