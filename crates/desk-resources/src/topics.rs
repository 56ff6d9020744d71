//! Knowledge base topics.

use desk_api_client::Params;
use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

/// A knowledge base topic, as returned by the API.
///
/// Values are snapshots: nothing is cached, and changing a field locally has
/// no effect until it is sent back with [`Topics::update`](crate::Topics::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub show_in_portal: bool,
    /// Ordering within the knowledge base; only present in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Topic {
    /// The mutable fields as an update body.
    pub fn to_update_params(&self) -> Params {
        Params::new()
            .with("name", self.name.as_str())
            .with("description", self.description.as_str())
            .with("show_in_portal", self.show_in_portal)
    }
}

impl Resource for Topic {
    const TYPE: ResourceType = ResourceType::Topics;
}
