//! Agents and the groups they belong to. Both are read-only through the API.

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

/// A helpdesk agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: ResourceId,
    pub name: String,
    pub email: String,
    /// Name shown to customers, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_public: Option<String>,
    /// Permission level, e.g. `agent` or `siteadmin_billing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_level: Option<String>,
}

impl Resource for User {
    const TYPE: ResourceType = ResourceType::Users;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    pub id: ResourceId,
    pub name: String,
}

impl Resource for UserGroup {
    const TYPE: ResourceType = ResourceType::UserGroups;
}
