//! # Failure Taxonomy
//!
//! Two layers of failures exist:
//! * [`CommandFailure`]: why a single external command did not produce usable output.
//! * [`SectionError`]: why a whole section has no records. Wraps command failures and
//!   adds the outcomes only the topology resolver can produce.
//!
//! Malformed lines never show up here. Parsers drop them on the spot.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandFailure {
    #[error("'{program}' was not found on this system")]
    NotFound { program: String },

    #[error("permission denied while running '{program}': {detail}")]
    PermissionDenied { program: String, detail: String },

    #[error("'{program}' exited with {}: {}", exit_label(.exit_code), trimmed(.stderr))]
    NonZeroExit {
        program: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("'{program}' did not finish within {}", seconds_label(.limit))]
    Timeout { program: String, limit: Duration },

    #[error("failed to run '{program}': {detail}")]
    Io { program: String, detail: String },
}

fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn trimmed(text: &str) -> &str {
    text.trim()
}

fn seconds_label(limit: &Duration) -> String {
    format!("{:.1}s", limit.as_secs_f64())
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error(transparent)]
    Command(#[from] CommandFailure),

    /// The batched inspect payload could not be decoded. No network of the batch is kept.
    #[error("could not decode '{tool}' network inspection output: {detail}")]
    TopologyDecode { tool: String, detail: String },

    /// The topology tool is not installed. A skip, not an error.
    #[error("'{tool}' not found, skipping")]
    Unavailable { tool: String },
}

impl SectionError {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
