use std::sync::Arc;

use netaudit_common::config::Config;
use netaudit_common::error::{CommandFailure, SectionError};
use netaudit_common::models::{Container, DockerNetwork};
use netaudit_common::report::{Section, SectionRecords, SectionStatus};
use netaudit_core::audit::Auditor;
use netaudit_core::credentials::NoCredential;
use netaudit_core::dispatch::{Action, ActionOutcome};
use netaudit_core::executor::SystemRunner;
use netaudit_core::observer::NoopObserver;

use crate::support::{EventLog, FakeHost, StaticCredential, sudo_rejects};

fn auditor(host: &Arc<FakeHost>, credentials: &Arc<StaticCredential>) -> Auditor {
    Auditor::new(
        &Config::default(),
        host.clone(),
        credentials.clone(),
        Arc::new(NoopObserver),
    )
}

/// A healthy host lists every section and the full run counts as a success.
#[tokio::test]
async fn run_all_on_a_healthy_host() {
    let host = Arc::new(FakeHost::default());
    let credentials = Arc::new(StaticCredential::new("hunter2"));

    let outcome = auditor(&host, &credentials).perform(Action::RunAll).await;

    assert!(outcome.succeeded());
    assert_eq!(
        outcome.summary(),
        vec![
            (Section::Interfaces, SectionStatus::Succeeded(3)),
            (Section::Addresses, SectionStatus::Succeeded(4)),
            (Section::Routes, SectionStatus::Succeeded(2)),
            (Section::Firewall, SectionStatus::Succeeded(3)),
            (Section::Sockets, SectionStatus::Succeeded(3)),
            (Section::Topology, SectionStatus::Succeeded(3)),
        ]
    );
}

/// Denied firewall access fails that section only. The other five keep their records
/// and every section is invoked exactly once.
#[tokio::test]
async fn denied_firewall_does_not_stop_the_run() {
    let host = Arc::new(FakeHost::default().with(
        "sudo -S ufw status numbered",
        sudo_rejects("sudo: 3 incorrect password attempts\n"),
    ));
    let credentials = Arc::new(StaticCredential::new("wrong"));

    let outcome = auditor(&host, &credentials).perform(Action::RunAll).await;
    let ActionOutcome::RunAll(report) = &outcome else {
        panic!("expected a run-all outcome, got {outcome:?}");
    };

    assert_eq!(report.len(), Section::ALL.len());
    assert_eq!(report.failed_count(), 1);
    assert!(!outcome.succeeded());
    assert_eq!(
        report.get(Section::Firewall),
        Some(&Err(SectionError::Command(CommandFailure::PermissionDenied {
            program: "sudo".to_string(),
            detail: "sudo: 3 incorrect password attempts".to_string(),
        })))
    );
    for section in [
        Section::Interfaces,
        Section::Addresses,
        Section::Routes,
        Section::Sockets,
        Section::Topology,
    ] {
        assert!(
            report.get(section).is_some_and(|outcome| outcome.is_ok()),
            "{section} should have succeeded"
        );
    }

    let calls = host.calls();
    for command in [
        "ip -br link show",
        "ip -br addr show",
        "ip route show",
        "sudo -S ufw status numbered",
        "ss -tuln",
        "docker network ls",
    ] {
        assert_eq!(
            calls.iter().filter(|call| call.as_str() == command).count(),
            1,
            "{command} should run exactly once"
        );
    }
}

#[tokio::test]
async fn credential_reaches_only_the_firewall_query() {
    let host = Arc::new(FakeHost::default());
    let credentials = Arc::new(StaticCredential::new("hunter2"));

    auditor(&host, &credentials).run_all().await;

    assert_eq!(credentials.requests(), 1);
    assert_eq!(
        host.secrets(),
        vec![(
            "sudo -S ufw status numbered".to_string(),
            "hunter2".to_string()
        )]
    );
}

/// Without docker, the topology section is skipped and the run still succeeds.
#[tokio::test]
async fn missing_docker_is_a_skip() {
    let host = Arc::new(FakeHost::default().without("which docker"));
    let credentials = Arc::new(StaticCredential::new("hunter2"));

    let outcome = auditor(&host, &credentials).perform(Action::RunAll).await;

    assert!(outcome.succeeded());
    assert!(outcome
        .summary()
        .contains(&(Section::Topology, SectionStatus::Skipped)));
    assert!(host.calls().iter().all(|call| !call.starts_with("docker")));
}

#[tokio::test]
async fn empty_networks_are_reported() {
    let host = Arc::new(FakeHost::default());
    let credentials = Arc::new(StaticCredential::new("hunter2"));

    let outcome = auditor(&host, &credentials)
        .run_section(Section::Topology)
        .await;

    assert_eq!(
        outcome,
        Ok(SectionRecords::Topology(vec![
            DockerNetwork::new("bridge", Vec::new()),
            DockerNetwork::new("host", Vec::new()),
            DockerNetwork::new(
                "custom1",
                vec![Container::new("web", Some("172.18.0.3/16".to_string()))]
            ),
        ]))
    );
}

#[tokio::test]
async fn broken_inspect_payload_fails_only_topology() {
    let host = Arc::new(FakeHost::default().with(
        "docker network inspect bridge host custom1",
        Ok(netaudit_core::executor::CommandOutput::from_stdout("not json")),
    ));
    let credentials = Arc::new(StaticCredential::new("hunter2"));

    let report = auditor(&host, &credentials).run_all().await;

    assert!(matches!(
        report.get(Section::Topology),
        Some(Err(SectionError::TopologyDecode { .. }))
    ));
    assert_eq!(report.failed_count(), 1);
}

#[tokio::test]
async fn run_all_events_bracket_the_sections() {
    let host = Arc::new(FakeHost::default().without("ss -tuln"));
    let events = Arc::new(EventLog::default());
    let auditor = Auditor::new(
        &Config::default(),
        host.clone(),
        Arc::new(NoCredential),
        events.clone(),
    );

    auditor.run_all().await;

    let events = events.events();
    assert_eq!(events.len(), Section::ALL.len() + 2);
    assert_eq!(events[0], "AuditStarted");
    assert!(events[5].starts_with("SectionFailed"));
    assert_eq!(
        events[7],
        "AuditFinished { succeeded: 5, skipped: 0, failed: 1 }"
    );
}

/// The real runner: an absent topology tool is skipped without error.
#[tokio::test]
async fn system_runner_skips_an_absent_topology_tool() {
    let cfg = Config {
        topology_tool: "__netaudit_missing_runtime__".to_string(),
        ..Config::default()
    };
    let runner = Arc::new(SystemRunner::new(None, Arc::new(NoopObserver)));
    let auditor = Auditor::new(&cfg, runner, Arc::new(NoCredential), Arc::new(NoopObserver));

    let outcome = auditor.perform(Action::Section(Section::Topology)).await;

    assert_eq!(
        outcome,
        ActionOutcome::Section {
            section: Section::Topology,
            outcome: Err(SectionError::Unavailable {
                tool: "__netaudit_missing_runtime__".to_string()
            }),
        }
    );
    assert!(outcome.summary().iter().all(|(_, status)| *status == SectionStatus::Skipped));
}
