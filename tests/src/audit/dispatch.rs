use std::sync::Arc;

use netaudit_common::config::Config;
use netaudit_common::report::Section;
use netaudit_core::audit::Auditor;
use netaudit_core::dispatch::{Action, ActionOutcome, DispatchTable};
use netaudit_core::observer::NoopObserver;

use crate::support::{FakeHost, StaticCredential};

#[tokio::test]
async fn section_ids_run_their_own_section() {
    let table = DispatchTable::standard();
    let host = Arc::new(FakeHost::default());
    let auditor = Auditor::new(
        &Config::default(),
        host.clone(),
        Arc::new(StaticCredential::new("hunter2")),
        Arc::new(NoopObserver),
    );

    for (id, expected) in (1u8..).zip(Section::ALL) {
        let action = table.resolve(id).expect("section id resolves");
        match auditor.perform(action).await {
            ActionOutcome::Section { section, outcome } => {
                assert_eq!(section, expected);
                assert!(outcome.is_ok(), "{section} failed: {outcome:?}");
            }
            other => panic!("id {id} produced {other:?}"),
        }
    }
}

#[tokio::test]
async fn exit_launches_nothing() {
    let table = DispatchTable::standard();
    let host = Arc::new(FakeHost::default());
    let auditor = Auditor::new(
        &Config::default(),
        host.clone(),
        Arc::new(StaticCredential::new("hunter2")),
        Arc::new(NoopObserver),
    );

    let outcome = auditor.perform(table.resolve(8).expect("exit resolves")).await;

    assert_eq!(outcome, ActionOutcome::Exit);
    assert!(outcome.succeeded());
    assert!(host.calls().is_empty());
}

#[test]
fn labels_follow_the_menu_order() {
    let labels: Vec<&str> = DispatchTable::standard()
        .entries()
        .iter()
        .map(|entry| entry.action.label())
        .collect();

    assert_eq!(labels.first(), Some(&"List network interfaces"));
    assert_eq!(labels.get(6), Some(&"Run all checks"));
    assert_eq!(labels.last(), Some(&"Exit"));
    assert_eq!(Action::RunAll.label(), "Run all checks");
}
