mod commands;
mod terminal;

use std::sync::Arc;

use commands::{CommandLine, audit, menu};
use netaudit_core::{
    audit::Auditor,
    dispatch::{Action, DispatchTable},
    executor::SystemRunner,
    observer::{AuditObserver, LogObserver},
};
use terminal::{logging, print, prompt::PromptCredential};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    let _log_guard = logging::init_logging(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);
    audit::local_system(&cfg);

    let observer: Arc<dyn AuditObserver> = Arc::new(LogObserver);
    let runner = Arc::new(SystemRunner::new(cfg.command_timeout, observer.clone()));
    let auditor = Auditor::new(&cfg, runner, Arc::new(PromptCredential), observer);

    let action = if commands.all {
        Action::RunAll
    } else {
        menu::choose(&DispatchTable::standard())?
    };

    let outcome = auditor.perform(action).await;
    audit::render(&outcome, &cfg);
    print::end_of_program();

    Ok(())
}
