use serde::{Deserialize, Serialize};

use super::endpoint::Endpoint;

/// Who to alert and which sites to check, as read from the sites document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(rename = "RECIPIENT_EMAIL")]
    pub recipient: String,
    #[serde(rename = "WEBSITE_URLS")]
    pub endpoints: Vec<Endpoint>,
}
