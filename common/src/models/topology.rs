#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    /// IPv4 address with prefix as the runtime reports it, e.g. `172.18.0.2/16`.
    pub ipv4: Option<String>,
}

impl Container {
    pub fn new(name: impl Into<String>, ipv4: Option<String>) -> Self {
        Self {
            name: name.into(),
            ipv4,
        }
    }
}

/// A container network. An empty `containers` list is a valid network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerNetwork {
    pub name: String,
    pub containers: Vec<Container>,
}

impl DockerNetwork {
    pub fn new(name: impl Into<String>, containers: Vec<Container>) -> Self {
        Self {
            name: name.into(),
            containers,
        }
    }
}
