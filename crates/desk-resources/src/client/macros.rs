use desk_api_client::{Params, Transport};

use super::{require_non_empty, Endpoint};
use crate::envelope::Page;
use crate::error::Result;
use crate::id::{IntoResourceId, ResourceId};
use crate::macros::Macro;
use crate::resource_type::ResourceType;

/// Operations on `/api/v1/macros`.
#[derive(Debug)]
pub struct Macros<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Macros<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Macros),
        }
    }

    pub async fn create(&self, name: &str) -> Result<ResourceId> {
        require_non_empty("macro name", name)?;
        self.endpoint
            .create(&ResourceType::Macros.collection_path(), Params::new().with("name", name))
            .await
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<Macro> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<Macro>> {
        self.endpoint
            .list(&ResourceType::Macros.collection_path(), count, page)
            .await
    }

    /// Send `fields` verbatim as a partial update and return the updated
    /// macro. An empty `fields` map fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// and nothing is sent.
    pub async fn update(&self, id: impl IntoResourceId, fields: impl Into<Params>) -> Result<Macro> {
        let id = id.into_resource_id()?;
        self.endpoint.update(id, fields.into()).await
    }

    pub async fn destroy(&self, id: impl IntoResourceId) -> Result<()> {
        let id = id.into_resource_id()?;
        self.endpoint.destroy(id).await
    }
}
