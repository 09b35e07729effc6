use serde::{Deserialize, Serialize};

use super::repo_types::MenuItem;

#[derive(Debug, Deserialize)]
pub struct MenuResponse {
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuSnapshot {
    pub items: Vec<MenuItem>,
    pub categories: Vec<String>,
    /// True when the items came from the network rather than the local cache.
    pub fetched: bool,
}
