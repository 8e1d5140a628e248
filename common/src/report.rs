//! # Audit Report
//!
//! Every section run produces exactly one [`SectionOutcome`]: either its records
//! (possibly none) or a [`SectionError`]. An [`AuditReport`] collects the outcomes of
//! one invocation, keyed by [`Section`] and iterated in run order.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::SectionError;
use crate::models::{
    AddressBinding, DockerNetwork, FirewallRule, Interface, RouteEntry, SocketListener,
};

pub type SectionResult<T> = Result<Vec<T>, SectionError>;

/// One independently parsed category of network information.
///
/// The declaration order is the order of a full audit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Interfaces,
    Addresses,
    Routes,
    Firewall,
    Sockets,
    Topology,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Interfaces,
        Section::Addresses,
        Section::Routes,
        Section::Firewall,
        Section::Sockets,
        Section::Topology,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Interfaces => "network interfaces",
            Self::Addresses => "ip addresses",
            Self::Routes => "routing table",
            Self::Firewall => "firewall rules",
            Self::Sockets => "open connections",
            Self::Topology => "docker networks",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The records of a successful section run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionRecords {
    Interfaces(Vec<Interface>),
    Addresses(Vec<AddressBinding>),
    Routes(Vec<RouteEntry>),
    Firewall(Vec<FirewallRule>),
    Sockets(Vec<SocketListener>),
    Topology(Vec<DockerNetwork>),
}

impl SectionRecords {
    pub fn len(&self) -> usize {
        match self {
            Self::Interfaces(records) => records.len(),
            Self::Addresses(records) => records.len(),
            Self::Routes(records) => records.len(),
            Self::Firewall(records) => records.len(),
            Self::Sockets(records) => records.len(),
            Self::Topology(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type SectionOutcome = Result<SectionRecords, SectionError>;

/// Condensed view of one outcome, used for the run-all summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Succeeded(usize),
    Skipped,
    Failed,
}

impl SectionStatus {
    pub fn of(outcome: &SectionOutcome) -> Self {
        match outcome {
            Ok(records) => Self::Succeeded(records.len()),
            Err(err) if err.is_skip() => Self::Skipped,
            Err(_) => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    sections: BTreeMap<Section, SectionOutcome>,
}

impl AuditReport {
    /// Assembles a report. A section listed twice keeps its first outcome.
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = (Section, SectionOutcome)>,
    {
        let mut sections = BTreeMap::new();
        for (section, outcome) in outcomes {
            sections.entry(section).or_insert(outcome);
        }
        Self { sections }
    }

    pub fn get(&self, section: Section) -> Option<&SectionOutcome> {
        self.sections.get(&section)
    }

    /// Outcomes in run order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionOutcome)> {
        self.sections.iter().map(|(section, outcome)| (*section, outcome))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn summary(&self) -> Vec<(Section, SectionStatus)> {
        self.iter()
            .map(|(section, outcome)| (section, SectionStatus::of(outcome)))
            .collect()
    }

    pub fn failed_count(&self) -> usize {
        self.summary()
            .iter()
            .filter(|(_, status)| *status == SectionStatus::Failed)
            .count()
    }
}
