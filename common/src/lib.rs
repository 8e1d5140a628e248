//! Shared types for `netaudit`.
//!
//! * [`models`]: the typed records each section parser produces.
//! * [`report`]: per-section outcomes and the aggregated [`report::AuditReport`].
//! * [`error`]: the failure taxonomy attached to a section's result.
//! * [`config`]: runtime settings filled in by the command line.

pub mod config;
pub mod error;
pub mod models;
pub mod report;
