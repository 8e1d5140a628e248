//! A simulated host for driving the auditor without touching the real system.

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use netaudit_common::error::CommandFailure;
use netaudit_core::credentials::CredentialSource;
use netaudit_core::executor::{CommandOutput, CommandRunner, CommandSpec};
use netaudit_core::observer::{AuditEvent, AuditObserver};
use secrecy::{ExposeSecret, SecretString};

pub const LINK_SHOW: &str = "\
lo               UNKNOWN        00:00:00:00:00:00 <LOOPBACK,UP,LOWER_UP>
eth0             UP             52:54:00:12:34:56 <BROADCAST,MULTICAST,UP,LOWER_UP>
docker0          DOWN           02:42:8e:1f:00:01 <NO-CARRIER,BROADCAST,MULTICAST,UP>
";

pub const ADDR_SHOW: &str = "\
lo               UNKNOWN        127.0.0.1/8 ::1/128
eth0             UP             192.168.1.20/24 fe80::5054:ff:fe12:3456/64
docker0          DOWN
";

pub const ROUTE_SHOW: &str = "\
default via 192.168.1.1 dev eth0 proto dhcp metric 100
192.168.1.0/24 dev eth0 proto kernel scope link src 192.168.1.20 metric 100
";

pub const UFW_STATUS: &str = "\
Status: active

     To                         Action      From
     --                         ------      ----
[ 1] 22/tcp                     ALLOW IN    Anywhere
[ 2] 443/tcp                    ALLOW IN    Anywhere
[ 3] 22/tcp (v6)                ALLOW IN    Anywhere (v6)
";

pub const SS_TULN: &str = "\
Netid State  Recv-Q Send-Q Local Address:Port  Peer Address:Port
udp   UNCONN 0      0      127.0.0.53%lo:53         0.0.0.0:*
tcp   LISTEN 0      4096       127.0.0.1:631        0.0.0.0:*
tcp   LISTEN 0      128          0.0.0.0:22         0.0.0.0:*
";

pub const NETWORK_LS: &str = "\
NETWORK ID     NAME      DRIVER    SCOPE
9f2d1c3b4a5e   bridge    bridge    local
3c4d5e6f7a8b   host      host      local
1a2b3c4d5e6f   custom1   bridge    local
";

pub const NETWORK_INSPECT: &str = r#"[
    {"Name": "bridge", "Driver": "bridge", "Containers": {}},
    {"Name": "host", "Driver": "host", "Containers": null},
    {"Name": "custom1", "Driver": "bridge", "Containers": {
        "e3b0c44298fc": {"Name": "web", "IPv4Address": "172.18.0.3/16", "IPv6Address": ""}
    }}
]"#;

/// Answers the audit's commands like a typical Linux host with ufw and docker.
///
/// Responses can be overridden or removed per command line. A removed command
/// behaves like a binary missing from the path.
pub struct FakeHost {
    responses: HashMap<String, Result<CommandOutput, CommandFailure>>,
    calls: Mutex<Vec<String>>,
    secrets: Mutex<Vec<(String, String)>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        let responses = [
            ("ip -br link show", LINK_SHOW),
            ("ip -br addr show", ADDR_SHOW),
            ("ip route show", ROUTE_SHOW),
            ("which sudo", "/usr/bin/sudo\n"),
            ("sudo -S ufw status numbered", UFW_STATUS),
            ("ss -tuln", SS_TULN),
            ("which docker", "/usr/bin/docker\n"),
            ("docker network ls", NETWORK_LS),
            ("docker network inspect bridge host custom1", NETWORK_INSPECT),
        ]
        .into_iter()
        .map(|(line, stdout)| (line.to_string(), Ok(CommandOutput::from_stdout(stdout))))
        .collect();

        Self {
            responses,
            calls: Mutex::new(Vec::new()),
            secrets: Mutex::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn with(mut self, command_line: &str, response: Result<CommandOutput, CommandFailure>) -> Self {
        self.responses.insert(command_line.to_string(), response);
        self
    }

    pub fn without(mut self, command_line: &str) -> Self {
        self.responses.remove(command_line);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// `(command line, piped secret)` pairs, in call order.
    pub fn secrets(&self) -> Vec<(String, String)> {
        self.secrets
            .lock()
            .map(|secrets| secrets.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandRunner for FakeHost {
    async fn run(&self, mut spec: CommandSpec) -> Result<CommandOutput, CommandFailure> {
        let command_line = spec.command_line();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command_line.clone());
        }
        if let Some(secret) = spec.take_input() {
            if let Ok(mut secrets) = self.secrets.lock() {
                secrets.push((command_line.clone(), secret.expose_secret().to_string()));
            }
        }

        match self.responses.get(&command_line) {
            Some(response) => response.clone(),
            None => Err(CommandFailure::NotFound {
                program: spec.program().to_string(),
            }),
        }
    }
}

/// Hands out the same credential every time and counts how often it was asked.
pub struct StaticCredential {
    secret: &'static str,
    requests: Mutex<usize>,
}

impl StaticCredential {
    pub fn new(secret: &'static str) -> Self {
        Self {
            secret,
            requests: Mutex::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.lock().map(|count| *count).unwrap_or_default()
    }
}

impl CredentialSource for StaticCredential {
    fn credential(&self) -> io::Result<Option<SecretString>> {
        if let Ok(mut count) = self.requests.lock() {
            *count += 1;
        }
        Ok(Some(SecretString::from(self.secret)))
    }
}

/// Keeps every event as its debug rendering.
#[derive(Default)]
pub struct EventLog {
    events: Mutex<Vec<String>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AuditObserver for EventLog {
    fn record(&self, event: &AuditEvent<'_>) {
        if let Ok(mut events) = self.events.lock() {
            events.push(format!("{event:?}"));
        }
    }
}

pub fn sudo_rejects(stderr: &str) -> Result<CommandOutput, CommandFailure> {
    Err(CommandFailure::NonZeroExit {
        program: "sudo".to_string(),
        exit_code: Some(1),
        stderr: stderr.to_string(),
    })
}
