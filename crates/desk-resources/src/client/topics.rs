use desk_api_client::{Params, Transport};

use super::{require_non_empty, Endpoint};
use crate::envelope::Page;
use crate::error::Result;
use crate::id::{IntoResourceId, ResourceId};
use crate::resource_type::ResourceType;
use crate::topics::Topic;

/// Operations on `/api/v1/topics`.
#[derive(Debug)]
pub struct Topics<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Topics<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Topics),
        }
    }

    /// Create a topic and return its id.
    ///
    /// `description` is only sent when non-empty; pass `""` and `false` for
    /// the server defaults.
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        show_in_portal: bool,
    ) -> Result<ResourceId> {
        require_non_empty("topic name", name)?;

        let body = Params::new()
            .with("name", name)
            .with("show_in_portal", show_in_portal)
            .with_if(!description.is_empty(), "description", description);

        self.endpoint
            .create(&ResourceType::Topics.collection_path(), body)
            .await
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<Topic> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    /// One page of topics; `count` and `page` start at 1.
    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<Topic>> {
        self.endpoint
            .list(&ResourceType::Topics.collection_path(), count, page)
            .await
    }

    /// Send `fields` verbatim as a partial update and return the updated
    /// topic. An empty `fields` map fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// and nothing is sent.
    pub async fn update(&self, id: impl IntoResourceId, fields: impl Into<Params>) -> Result<Topic> {
        let id = id.into_resource_id()?;
        self.endpoint.update(id, fields.into()).await
    }

    /// Set the topic name for one language.
    pub async fn update_translation(
        &self,
        id: impl IntoResourceId,
        language: &str,
        name: &str,
    ) -> Result<Topic> {
        let id = id.into_resource_id()?;
        require_non_empty("language", language)?;
        require_non_empty("topic name", name)?;

        let body = Params::new().with("language", language).with("name", name);
        self.endpoint.update(id, body).await
    }

    pub async fn destroy(&self, id: impl IntoResourceId) -> Result<()> {
        let id = id.into_resource_id()?;
        self.endpoint.destroy(id).await
    }
}
