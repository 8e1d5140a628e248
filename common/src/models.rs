//! # Audit Records
//!
//! One module per section. Each record is a plain value built fresh from the output
//! of a single command run and never mutated afterwards.

pub mod address;
pub mod firewall;
pub mod link;
pub mod route;
pub mod socket;
pub mod topology;

pub use address::AddressBinding;
pub use firewall::FirewallRule;
pub use link::{Interface, LinkState};
pub use route::RouteEntry;
pub use socket::SocketListener;
pub use topology::{Container, DockerNetwork};
