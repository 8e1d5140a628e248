//! # Auditor
//!
//! Owns the per-section pipelines (command, then parser or topology resolver) and the
//! orchestration around them. A section never affects its siblings: a failed command
//! becomes that section's error and the run goes on.

use std::sync::Arc;

use netaudit_common::config::Config;
use netaudit_common::error::CommandFailure;
use netaudit_common::models::FirewallRule;
use netaudit_common::report::{
    AuditReport, Section, SectionOutcome, SectionRecords, SectionResult, SectionStatus,
};

use crate::commands::{self, ESCALATION_PROGRAM};
use crate::credentials::CredentialSource;
use crate::dispatch::{Action, ActionOutcome};
use crate::executor::{self, CommandRunner, CommandSpec};
use crate::observer::{AuditEvent, AuditObserver};
use crate::parsers::{
    AddressParser, FirewallParser, InterfaceParser, LineParser, RouteParser, SocketParser,
};
use crate::topology::TopologyResolver;

/// Markers sudo and firewall frontends print when the caller lacks privileges.
const DENIED_MARKERS: &[&str] = &[
    "incorrect password",
    "a password is required",
    "not in the sudoers file",
    "is not allowed to execute",
    "need to be root",
];

const MISSING_COMMAND_MARKER: &str = "command not found";

pub struct Auditor {
    runner: Arc<dyn CommandRunner>,
    credentials: Arc<dyn CredentialSource>,
    observer: Arc<dyn AuditObserver>,
    firewall_tool: String,
    topology: TopologyResolver,
}

impl Auditor {
    pub fn new(
        cfg: &Config,
        runner: Arc<dyn CommandRunner>,
        credentials: Arc<dyn CredentialSource>,
        observer: Arc<dyn AuditObserver>,
    ) -> Self {
        let topology = TopologyResolver::new(runner.clone(), cfg.topology_tool.clone());
        Self {
            runner,
            credentials,
            observer,
            firewall_tool: cfg.firewall_tool.clone(),
            topology,
        }
    }

    pub async fn perform(&self, action: Action) -> ActionOutcome {
        match action {
            Action::Section(section) => ActionOutcome::Section {
                section,
                outcome: self.run_section(section).await,
            },
            Action::RunAll => ActionOutcome::RunAll(self.run_all().await),
            Action::Exit => {
                self.observer.record(&AuditEvent::Exited);
                ActionOutcome::Exit
            }
        }
    }

    /// Runs every section in [`Section::ALL`] order. Each one is invoked exactly once,
    /// whatever happened to the ones before it.
    pub async fn run_all(&self) -> AuditReport {
        self.observer.record(&AuditEvent::AuditStarted);

        let mut outcomes = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            outcomes.push((section, self.run_section(section).await));
        }
        let report = AuditReport::from_outcomes(outcomes);

        let summary = report.summary();
        let count = |wanted: fn(&SectionStatus) -> bool| {
            summary.iter().filter(|(_, status)| wanted(status)).count()
        };
        self.observer.record(&AuditEvent::AuditFinished {
            succeeded: count(|status| matches!(status, SectionStatus::Succeeded(_))),
            skipped: count(|status| *status == SectionStatus::Skipped),
            failed: count(|status| *status == SectionStatus::Failed),
        });

        report
    }

    pub async fn run_section(&self, section: Section) -> SectionOutcome {
        let outcome = match section {
            Section::Interfaces => self
                .listed::<InterfaceParser>(commands::link_show())
                .await
                .map(SectionRecords::Interfaces),
            Section::Addresses => self
                .listed::<AddressParser>(commands::addr_show())
                .await
                .map(SectionRecords::Addresses),
            Section::Routes => self
                .listed::<RouteParser>(commands::route_show())
                .await
                .map(SectionRecords::Routes),
            Section::Firewall => self.firewall_rules().await.map(SectionRecords::Firewall),
            Section::Sockets => self
                .listed::<SocketParser>(commands::socket_summary())
                .await
                .map(SectionRecords::Sockets),
            Section::Topology => self.topology.resolve().await.map(SectionRecords::Topology),
        };

        match &outcome {
            Ok(records) => self.observer.record(&AuditEvent::SectionCompleted {
                section,
                records: records.len(),
            }),
            Err(err) if err.is_skip() => self.observer.record(&AuditEvent::SectionSkipped {
                section,
                reason: err,
            }),
            Err(err) => self
                .observer
                .record(&AuditEvent::SectionFailed { section, error: err }),
        }
        outcome
    }

    async fn listed<P: LineParser>(&self, spec: CommandSpec) -> SectionResult<P::Record> {
        let output = self.runner.run(spec).await?;
        Ok(P::parse(&output.stdout))
    }

    /// Probes the escalation program before asking for a credential, so a host without
    /// it never prompts. The credential is moved into the single escalated call.
    async fn firewall_rules(&self) -> SectionResult<FirewallRule> {
        if !executor::tool_available(self.runner.as_ref(), ESCALATION_PROGRAM).await {
            return Err(CommandFailure::NotFound {
                program: ESCALATION_PROGRAM.to_string(),
            }
            .into());
        }

        let credential =
            self.credentials
                .credential()
                .map_err(|err| CommandFailure::PermissionDenied {
                    program: ESCALATION_PROGRAM.to_string(),
                    detail: format!("no credential provided: {err}"),
                })?;

        let output = self
            .runner
            .run(commands::firewall_status(&self.firewall_tool, credential))
            .await
            .map_err(|failure| classify_escalation_failure(failure, &self.firewall_tool))?;

        Ok(FirewallParser::parse(&output.stdout))
    }
}

/// Refines a failed escalated call: authentication problems become `PermissionDenied`
/// and a missing firewall tool becomes `NotFound` for that tool.
fn classify_escalation_failure(failure: CommandFailure, tool: &str) -> CommandFailure {
    let CommandFailure::NonZeroExit { stderr, .. } = &failure else {
        return failure;
    };
    let lowered = stderr.to_lowercase();

    if lowered.contains(MISSING_COMMAND_MARKER) {
        return CommandFailure::NotFound {
            program: tool.to_string(),
        };
    }
    if DENIED_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        let detail = stderr
            .lines()
            .map(str::trim)
            .rfind(|line| !line.is_empty())
            .unwrap_or("authentication failed")
            .to_string();
        return CommandFailure::PermissionDenied {
            program: ESCALATION_PROGRAM.to_string(),
            detail,
        };
    }
    failure
}
