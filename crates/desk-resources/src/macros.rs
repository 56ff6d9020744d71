//! Agent macros: canned sets of case actions.

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub id: ResourceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Resource for Macro {
    const TYPE: ResourceType = ResourceType::Macros;
}
