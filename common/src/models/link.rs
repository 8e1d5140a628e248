use std::fmt;

/// Operational state as reported in the second column of `ip -br link show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Up,
    Down,
    Unknown,
}

impl LinkState {
    /// Maps the state column. The comparison is case-sensitive; any token other than
    /// `UP` or `DOWN` is `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            _ => Self::Unknown,
        }
    }

    pub fn is_up(&self) -> bool {
        *self == Self::Up
    }
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub state: LinkState,
}

impl Interface {
    pub fn new(name: impl Into<String>, state: LinkState) -> Self {
        Self {
            name: name.into(),
            state,
        }
    }
}
