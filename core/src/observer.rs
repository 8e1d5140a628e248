//! # Audit Observer
//!
//! The logging sink handed to the executor and the auditor at construction.
//!
//! Components report what happened; the observer decides whether it becomes a log
//! line, a test assertion, or nothing. Recording an event never changes control flow.

use std::time::Duration;

use netaudit_common::error::{CommandFailure, SectionError};
use netaudit_common::report::Section;

#[derive(Debug)]
pub enum AuditEvent<'a> {
    /// A full audit run is about to start.
    AuditStarted,

    /// A full audit run ended. `skipped` sections are not counted as failed.
    AuditFinished {
        succeeded: usize,
        skipped: usize,
        failed: usize,
    },

    CommandStarted {
        command: &'a str,
    },

    CommandCompleted {
        command: &'a str,
        elapsed: Duration,
    },

    CommandFailed {
        command: &'a str,
        failure: &'a CommandFailure,
    },

    /// A tool lookup found nothing. Expected on hosts without the tool.
    ToolMissing {
        tool: &'a str,
    },

    SectionCompleted {
        section: Section,
        records: usize,
    },

    SectionSkipped {
        section: Section,
        reason: &'a SectionError,
    },

    SectionFailed {
        section: Section,
        error: &'a SectionError,
    },

    /// The user left the menu without running anything else.
    Exited,
}

pub trait AuditObserver: Send + Sync {
    fn record(&self, event: &AuditEvent<'_>);
}

/// Forwards every event to `tracing`.
pub struct LogObserver;

impl AuditObserver for LogObserver {
    fn record(&self, event: &AuditEvent<'_>) {
        match event {
            AuditEvent::AuditStarted => {
                tracing::info!("Starting network configuration audit");
            }
            AuditEvent::AuditFinished {
                succeeded,
                skipped,
                failed,
            } => {
                tracing::info!(succeeded, skipped, failed, "Network configuration audit finished");
            }
            AuditEvent::CommandStarted { command } => {
                tracing::debug!(command, "Running command");
            }
            AuditEvent::CommandCompleted { command, elapsed } => {
                tracing::debug!(
                    command,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Command completed"
                );
            }
            AuditEvent::CommandFailed { command, failure } => {
                tracing::error!(command, error = %failure, "Error executing command");
            }
            AuditEvent::ToolMissing { tool } => {
                tracing::debug!(tool, "Tool not found on the execution path");
            }
            AuditEvent::SectionCompleted { section, records } => {
                tracing::info!(section = section.title(), records, "Section listed");
            }
            AuditEvent::SectionSkipped { section, reason } => {
                tracing::warn!(section = section.title(), reason = %reason, "Section skipped");
            }
            AuditEvent::SectionFailed { section, error } => {
                tracing::error!(section = section.title(), error = %error, "Section failed");
            }
            AuditEvent::Exited => {
                tracing::info!("Network configuration audit completed");
            }
        }
    }
}

/// Discards every event.
pub struct NoopObserver;

impl AuditObserver for NoopObserver {
    #[inline(always)]
    fn record(&self, _event: &AuditEvent<'_>) {}
}
