use colored::*;
use comfy_table::{Cell, Table};
use netaudit_common::{
    config::Config,
    error::SectionError,
    models::{DockerNetwork, LinkState},
    report::{AuditReport, Section, SectionOutcome, SectionRecords, SectionStatus},
};
use netaudit_core::dispatch::ActionOutcome;

use crate::nprint;
use crate::terminal::{colors, print, table};

pub fn local_system(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let hostname = sys_info::hostname().unwrap_or_else(|_| "unknown".to_string());
    let os = match (sys_info::os_type(), sys_info::os_release()) {
        (Ok(kind), Ok(release)) => format!("{kind} {release}"),
        (Ok(kind), Err(_)) => kind,
        _ => "unknown".to_string(),
    };
    let privileges = if is_root::is_root() {
        "root".color(colors::ALERT)
    } else {
        "user (firewall rules need sudo)".color(colors::TEXT_DEFAULT)
    };

    print::header("local system", cfg.quiet);
    print::key_values(&[
        ("Hostname", hostname.color(colors::TEXT_DEFAULT)),
        ("OS", os.color(colors::TEXT_DEFAULT)),
        ("Privileges", privileges),
    ]);
}

pub fn render(outcome: &ActionOutcome, cfg: &Config) {
    match outcome {
        ActionOutcome::Section { section, outcome } => render_section(*section, outcome, cfg),
        ActionOutcome::RunAll(report) => {
            for (section, outcome) in report.iter() {
                render_section(section, outcome, cfg);
                nprint!();
            }
            render_summary(report, cfg);
        }
        ActionOutcome::Exit => {
            print::success("Exiting. Thank you for using the network configuration audit tool.");
        }
    }
}

fn render_section(section: Section, outcome: &SectionOutcome, cfg: &Config) {
    print::header(section.title(), cfg.quiet);

    match outcome {
        Ok(records) if records.is_empty() => print::print_status(empty_notice(section)),
        Ok(records) => {
            if cfg.quiet < 2 {
                print::print(&records_table(records).to_string());
            }
        }
        Err(err) if err.is_skip() => print::warning(&err.to_string()),
        Err(err) => print::failure(&failure_notice(section, err)),
    }
}

fn render_summary(report: &AuditReport, cfg: &Config) {
    let summary = report.summary();

    if cfg.quiet == 0 {
        print::fat_separator();
        let lines: Vec<(&str, ColoredString)> = summary
            .iter()
            .map(|(section, status)| (section.title(), status_label(*status)))
            .collect();
        print::key_values(&lines);
    }

    let count = |wanted: fn(&SectionStatus) -> bool| {
        summary.iter().filter(|(_, status)| wanted(status)).count()
    };
    let succeeded = count(|status| matches!(status, SectionStatus::Succeeded(_)));
    let skipped = count(|status| *status == SectionStatus::Skipped);
    let failed = report.failed_count();

    let output = format!(
        "Audit complete: {} succeeded, {} skipped, {} failed",
        succeeded.to_string().green().bold(),
        skipped.to_string().yellow().bold(),
        failed.to_string().red().bold()
    );
    match cfg.quiet {
        0 => print::centerln(&output),
        _ => print::success(&output),
    }
}

fn status_label(status: SectionStatus) -> ColoredString {
    match status {
        SectionStatus::Succeeded(1) => "1 entry".green(),
        SectionStatus::Succeeded(count) => format!("{count} entries").green(),
        SectionStatus::Skipped => "skipped".yellow(),
        SectionStatus::Failed => "failed".red().bold(),
    }
}

fn empty_notice(section: Section) -> &'static str {
    match section {
        Section::Topology => "No Docker networks found.",
        Section::Firewall => "No firewall rules found.",
        _ => "No entries.",
    }
}

fn failure_notice(section: Section, err: &SectionError) -> String {
    format!("Error listing {}: {}", section.title(), err)
}

fn records_table(records: &SectionRecords) -> Table {
    match records {
        SectionRecords::Interfaces(interfaces) => {
            let mut grid = table::grid(&["Interface", "Status"]);
            for interface in interfaces {
                let state = match interface.state {
                    LinkState::Up => table::STATE_UP,
                    LinkState::Down | LinkState::Unknown => table::STATE_DOWN,
                };
                grid.add_row(vec![
                    Cell::new(&interface.name),
                    Cell::new(interface.state).fg(state),
                ]);
            }
            grid
        }
        SectionRecords::Addresses(bindings) => {
            let mut grid = table::grid(&["Interface", "IP Address"]);
            for binding in bindings {
                grid.add_row(vec![
                    Cell::new(&binding.interface),
                    Cell::new(&binding.address).fg(table::ADDRESS),
                ]);
            }
            grid
        }
        SectionRecords::Routes(routes) => {
            let mut grid = table::grid(&["Route"]);
            for route in routes {
                grid.add_row(vec![Cell::new(&route.raw).fg(table::STATE_UP)]);
            }
            grid
        }
        SectionRecords::Firewall(rules) => {
            let mut grid = table::grid(&["#", "Rule"]);
            for rule in rules {
                grid.add_row(vec![
                    Cell::new(rule.index),
                    Cell::new(&rule.text).fg(table::ADDRESS),
                ]);
            }
            grid
        }
        SectionRecords::Sockets(listeners) => {
            let mut grid =
                table::grid(&["Protocol", "State", "Local Address", "Remote Address"]);
            for listener in listeners {
                grid.add_row(vec![
                    Cell::new(&listener.protocol).fg(table::STATE_UP),
                    Cell::new(&listener.state),
                    Cell::new(&listener.local).fg(table::ADDRESS),
                    Cell::new(listener.remote.as_deref().unwrap_or("-")).fg(table::ADDRESS),
                ]);
            }
            grid
        }
        SectionRecords::Topology(networks) => topology_table(networks),
    }
}

/// One row per network, followed by one row per attached container.
fn topology_table(networks: &[DockerNetwork]) -> Table {
    let mut grid = table::grid(&["Network Name", "Host Name", "Host IP"]);
    for network in networks {
        grid.add_row(vec![
            Cell::new(&network.name).fg(table::NETWORK),
            Cell::new(""),
            Cell::new(""),
        ]);
        for container in &network.containers {
            grid.add_row(vec![
                Cell::new(""),
                Cell::new(&container.name).fg(table::ADDRESS),
                Cell::new(container.ipv4.as_deref().unwrap_or("-")).fg(table::ADDRESS),
            ]);
        }
    }
    grid
}
