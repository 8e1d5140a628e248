use std::fmt;
use std::io;
use std::path::Path;

use colored::*;
use netaudit_common::config::Config;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, filter_fn};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Target of every event meant for the terminal rather than the log file.
pub const PRINT_TARGET: &str = "netaudit::print";

/// Field carrying pre-formatted terminal output, written without a level marker.
pub const RAW_FIELD: &str = "raw_msg";

const LOG_FILE_NAME: &str = "audit_network.log";
const MAX_LOG_BYTES: u64 = 1_000_000;
const MAX_LOG_BACKUPS: usize = 5;

pub struct NetauditFormatter;

impl<S, N> FormatEvent<S, N> for NetauditFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.fields().field(RAW_FIELD).is_some() {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == RAW_FIELD {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == RAW_FIELD {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Installs the terminal and log-file layers.
///
/// The terminal only receives [`PRINT_TARGET`] events. The log file receives every
/// other event passing `RUST_LOG` (default `info`), with timestamp and level, and
/// rolls over to `audit_network.log.1` .. `.5` once it reaches 1 MB.
/// The returned guard flushes the file writer when dropped.
pub fn init_logging(cfg: &Config) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&cfg.log_dir)?;

    let appender = log_appender(&cfg.log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let file_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?
        .add_directive(format!("{PRINT_TARGET}=off").parse()?);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false)
        .with_filter(file_filter);

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(NetauditFormatter)
        .with_writer(std::io::stdout)
        .with_filter(filter_fn(|meta| meta.target() == PRINT_TARGET));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn log_appender(dir: &Path) -> io::Result<BasicRollingFileAppender> {
    BasicRollingFileAppender::new(
        dir.join(LOG_FILE_NAME),
        RollingConditionBasic::new().max_size(MAX_LOG_BYTES),
        MAX_LOG_BACKUPS,
    )
}
