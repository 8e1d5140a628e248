/// A routing table line, kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub raw: String,
}

impl RouteEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}
