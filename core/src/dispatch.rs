//! # Dispatch Table
//!
//! Maps the discrete menu choices to the action they trigger. The table is built
//! once at startup; the interactive menu and `--all` both resolve through it.

use netaudit_common::report::{AuditReport, Section, SectionOutcome, SectionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Section(Section),
    /// Every section, in run order, without stopping on failures.
    RunAll,
    Exit,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Section(Section::Interfaces) => "List network interfaces",
            Self::Section(Section::Addresses) => "Show IP addresses",
            Self::Section(Section::Routes) => "Show routing table",
            Self::Section(Section::Firewall) => "Show firewall rules",
            Self::Section(Section::Sockets) => "List open network connections",
            Self::Section(Section::Topology) => "List Docker networks",
            Self::RunAll => "Run all checks",
            Self::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: u8,
    pub action: Action,
}

#[derive(Debug, Clone)]
pub struct DispatchTable {
    entries: Vec<MenuEntry>,
}

impl DispatchTable {
    /// `1..=6` for the sections in run order, `7` runs everything, `8` exits.
    pub fn standard() -> Self {
        let actions = Section::ALL
            .into_iter()
            .map(Action::Section)
            .chain([Action::RunAll, Action::Exit]);

        let entries = (1u8..)
            .zip(actions)
            .map(|(id, action)| MenuEntry { id, action })
            .collect();

        Self { entries }
    }

    pub fn resolve(&self, id: u8) -> Option<Action> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.action)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn max_id(&self) -> u8 {
        self.entries.iter().map(|entry| entry.id).max().unwrap_or(0)
    }
}

/// What an action produced, handed read-only to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Section {
        section: Section,
        outcome: SectionOutcome,
    },
    RunAll(AuditReport),
    Exit,
}

impl ActionOutcome {
    /// A single section succeeds when it produced records, even none. A full run
    /// succeeds when no section failed; skipped sections do not count against it.
    pub fn succeeded(&self) -> bool {
        match self {
            Self::Section { outcome, .. } => outcome.is_ok(),
            Self::RunAll(report) => report.failed_count() == 0,
            Self::Exit => true,
        }
    }

    pub fn summary(&self) -> Vec<(Section, SectionStatus)> {
        match self {
            Self::Section { section, outcome } => vec![(*section, SectionStatus::of(outcome))],
            Self::RunAll(report) => report.summary(),
            Self::Exit => Vec::new(),
        }
    }
}
