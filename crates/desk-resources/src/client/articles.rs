use desk_api_client::{Params, Transport};

use super::{require_non_empty, Endpoint};
use crate::articles::Article;
use crate::envelope::Page;
use crate::error::Result;
use crate::id::{IntoResourceId, ResourceId};
use crate::resource_type::ResourceType;

/// Operations on articles. Articles are created and listed under their
/// topic (`/api/v1/topics/{topic_id}/articles`) and addressed directly
/// otherwise (`/api/v1/articles/{id}`).
#[derive(Debug)]
pub struct Articles<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Articles<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Articles),
        }
    }

    /// Create an article in `topic_id` and return its id. `main_content` is
    /// only sent when non-empty.
    pub async fn create(
        &self,
        topic_id: impl IntoResourceId,
        subject: &str,
        main_content: &str,
        show_in_portal: bool,
    ) -> Result<ResourceId> {
        let topic_id = topic_id.into_resource_id()?;
        require_non_empty("article subject", subject)?;

        let body = Params::new()
            .with("subject", subject)
            .with("show_in_portal", show_in_portal)
            .with_if(!main_content.is_empty(), "main_content", main_content);

        let path = ResourceType::Topics.nested_collection_path(topic_id, ResourceType::Articles);
        self.endpoint.create(&path, body).await
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<Article> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    /// One page of the articles filed under `topic_id`.
    pub async fn retrieve_all(
        &self,
        topic_id: impl IntoResourceId,
        count: u32,
        page: u32,
    ) -> Result<Page<Article>> {
        let topic_id = topic_id.into_resource_id()?;
        let path = ResourceType::Topics.nested_collection_path(topic_id, ResourceType::Articles);
        self.endpoint.list(&path, count, page).await
    }

    /// Send `fields` verbatim as a partial update and return the updated
    /// article. An empty `fields` map fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// and nothing is sent.
    pub async fn update(
        &self,
        id: impl IntoResourceId,
        fields: impl Into<Params>,
    ) -> Result<Article> {
        let id = id.into_resource_id()?;
        self.endpoint.update(id, fields.into()).await
    }

    /// Set the article subject for one language.
    pub async fn update_translation(
        &self,
        id: impl IntoResourceId,
        language: &str,
        subject: &str,
    ) -> Result<Article> {
        let id = id.into_resource_id()?;
        require_non_empty("language", language)?;
        require_non_empty("article subject", subject)?;

        let body = Params::new()
            .with("language", language)
            .with("subject", subject);
        self.endpoint.update(id, body).await
    }

    pub async fn destroy(&self, id: impl IntoResourceId) -> Result<()> {
        let id = id.into_resource_id()?;
        self.endpoint.destroy(id).await
    }
}
