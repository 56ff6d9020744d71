//! Knowledge base articles, each filed under a topic.

use desk_api_client::Params;
use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ResourceId,
    pub subject: String,
    /// HTML body; empty for drafts.
    #[serde(default)]
    pub main_content: String,
    pub show_in_portal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl Article {
    /// The mutable fields as an update body.
    pub fn to_update_params(&self) -> Params {
        Params::new()
            .with("subject", self.subject.as_str())
            .with("main_content", self.main_content.as_str())
            .with("show_in_portal", self.show_in_portal)
    }
}

impl Resource for Article {
    const TYPE: ResourceType = ResourceType::Articles;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_without_content() {
        let article: Article = serde_json::from_value(json!({
            "id": 31,
            "subject": "Resetting your password",
            "show_in_portal": true
        }))
        .unwrap();

        assert_eq!(article.main_content, "");
        assert_eq!(article.position, None);
    }
}
