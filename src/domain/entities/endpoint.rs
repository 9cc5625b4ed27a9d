use std::fmt;

use serde::{Deserialize, Serialize};

/// A monitored URL. Two endpoints are the same endpoint when their strings match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for Endpoint {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins endpoints with a bare comma, the separator used in log and mail text.
#[must_use]
pub fn join_endpoints<'a>(endpoints: impl IntoIterator<Item = &'a Endpoint>) -> String {
    endpoints
        .into_iter()
        .map(Endpoint::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
