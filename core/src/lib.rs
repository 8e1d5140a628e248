//! # netaudit core
//!
//! Runs the host's networking tools and normalizes what they print into typed
//! records, one [`report::Section`](netaudit_common::report::Section) at a time.
//!
//! * [`executor`]: spawns one program per call, classifies failures.
//! * [`commands`]: the fixed argument vector of every command.
//! * [`parsers`]: line-oriented parsers, tolerant of malformed lines.
//! * [`topology`]: container network enumeration and the batched inspect decode.
//! * [`audit`]: per-section pipelines, run-all and action dispatch.
//! * [`observer`]: the logging sink injected into the executor and the auditor.

pub mod audit;
pub mod commands;
pub mod credentials;
pub mod dispatch;
pub mod executor;
pub mod observer;
pub mod parsers;
pub mod topology;
