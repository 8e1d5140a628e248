//! # Docker Topology Resolution
//!
//! Resolves which containers sit on which container network, in three phases that
//! each may end the run early:
//! 1. **Probe**: is the topology tool on the path? If not, the section is
//!    [`SectionError::Unavailable`] and nothing else is launched.
//! 2. **Enumerate**: `<tool> network ls`. No networks is a successful, empty result.
//! 3. **Inspect**: one `<tool> network inspect <names...>` call for the whole batch,
//!    decoded as a JSON array and joined into [`DockerNetwork`] records.
//!
//! Decoding is atomic per batch: if any network object fails to decode, no network
//! of the batch is returned.

use std::sync::Arc;

use netaudit_common::error::SectionError;
use netaudit_common::models::{Container, DockerNetwork};
use netaudit_common::report::SectionResult;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::commands;
use crate::executor::{self, CommandRunner};
use crate::parsers::{LineParser, NetworkNameParser};

#[derive(Debug, Deserialize)]
struct InspectedNetwork {
    #[serde(rename = "Name")]
    name: String,

    /// Keyed by container id. `serde_json` keeps the payload's key order.
    #[serde(rename = "Containers", default)]
    containers: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct InspectedContainer {
    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "IPv4Address", default)]
    ipv4_address: Option<String>,
}

impl InspectedNetwork {
    fn into_network(self) -> Result<DockerNetwork, serde_json::Error> {
        let containers = self
            .containers
            .unwrap_or_default()
            .into_iter()
            .map(|(_id, value)| -> Result<Container, serde_json::Error> {
                let container: InspectedContainer = serde_json::from_value(value)?;
                let ipv4 = container.ipv4_address.filter(|address| !address.is_empty());
                Ok(Container::new(container.name, ipv4))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DockerNetwork::new(self.name, containers))
    }
}

pub struct TopologyResolver {
    runner: Arc<dyn CommandRunner>,
    tool: String,
}

impl TopologyResolver {
    pub fn new(runner: Arc<dyn CommandRunner>, tool: impl Into<String>) -> Self {
        Self {
            runner,
            tool: tool.into(),
        }
    }

    pub async fn resolve(&self) -> SectionResult<DockerNetwork> {
        if !executor::tool_available(self.runner.as_ref(), &self.tool).await {
            return Err(SectionError::Unavailable {
                tool: self.tool.clone(),
            });
        }

        let listing = self.runner.run(commands::network_ls(&self.tool)).await?;
        let names = NetworkNameParser::parse(&listing.stdout);
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let inspected = self
            .runner
            .run(commands::network_inspect(&self.tool, &names))
            .await?;
        self.decode(&inspected.stdout)
    }

    fn decode(&self, payload: &str) -> SectionResult<DockerNetwork> {
        decode_inspect(payload).map_err(|err| SectionError::TopologyDecode {
            tool: self.tool.clone(),
            detail: err.to_string(),
        })
    }
}

/// Decodes a batched `network inspect` payload into networks, in payload order.
pub fn decode_inspect(payload: &str) -> Result<Vec<DockerNetwork>, serde_json::Error> {
    let networks: Vec<InspectedNetwork> = serde_json::from_str(payload)?;
    networks
        .into_iter()
        .map(InspectedNetwork::into_network)
        .collect()
}
