use serde::{Deserialize, Serialize};

/// Availability of one endpoint within a run.
///
/// Every endpoint starts a run as `Unknown` and is resolved exactly once by
/// its probe. A resolved status never moves again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointStatus {
    #[default]
    Unknown,
    Up,
    Down,
}

impl std::fmt::Display for EndpointStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

impl EndpointStatus {
    #[must_use]
    pub const fn resolve(self, reachable: bool) -> Self {
        match self {
            Self::Unknown => {
                if reachable {
                    Self::Up
                } else {
                    Self::Down
                }
            }
            resolved => resolved,
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}
