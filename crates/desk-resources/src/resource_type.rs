//! The closed set of resource types exposed by the Desk API.

use std::fmt;
use std::str::FromStr;

use desk_api_client::API_VERSION;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::id::ResourceId;

/// A category of remote entity.
///
/// The wire identifier (`as_str`) is the plural path segment used in API
/// URLs; `entity_key` is the singular key wrapping each entity in a response
/// envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceType {
    Cases,
    Customers,
    Interactions,
    Users,
    UserGroups,
    Topics,
    Articles,
    Macros,
}

impl ResourceType {
    /// Every resource type, in declaration order.
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Cases,
        ResourceType::Customers,
        ResourceType::Interactions,
        ResourceType::Users,
        ResourceType::UserGroups,
        ResourceType::Topics,
        ResourceType::Articles,
        ResourceType::Macros,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Cases => "cases",
            ResourceType::Customers => "customers",
            ResourceType::Interactions => "interactions",
            ResourceType::Users => "users",
            ResourceType::UserGroups => "user_groups",
            ResourceType::Topics => "topics",
            ResourceType::Articles => "articles",
            ResourceType::Macros => "macros",
        }
    }

    pub const fn entity_key(&self) -> &'static str {
        match self {
            ResourceType::Cases => "case",
            ResourceType::Customers => "customer",
            ResourceType::Interactions => "interaction",
            ResourceType::Users => "user",
            ResourceType::UserGroups => "user_group",
            ResourceType::Topics => "topic",
            ResourceType::Articles => "article",
            ResourceType::Macros => "macro",
        }
    }

    /// `/api/v1/{type}.json`
    pub fn collection_path(&self) -> String {
        format!("/api/{API_VERSION}/{}.json", self.as_str())
    }

    /// `/api/v1/{type}/{id}.json`
    pub fn member_path(&self, id: ResourceId) -> String {
        format!("/api/{API_VERSION}/{}/{id}.json", self.as_str())
    }

    /// `/api/v1/{type}/{parent}/{child}.json`, for collections scoped to a
    /// parent entity such as a topic's articles.
    pub fn nested_collection_path(&self, parent: ResourceId, child: ResourceType) -> String {
        format!("/api/{API_VERSION}/{}/{parent}/{}.json", self.as_str(), child.as_str())
    }

    /// Whether `value` names one of the declared resource types.
    pub fn is_valid_type(value: &str) -> bool {
        Self::ALL.iter().any(|t| t.as_str() == value)
    }

    /// Like [`is_valid_type`](Self::is_valid_type) for untyped input: only a
    /// JSON string holding a declared identifier is valid.
    pub fn is_valid_value(value: &Value) -> bool {
        value.as_str().is_some_and(Self::is_valid_type)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("unknown resource type '{s}'")))
    }
}
