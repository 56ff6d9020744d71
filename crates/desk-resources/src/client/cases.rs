use desk_api_client::{Params, Transport};

use super::Endpoint;
use crate::cases::Case;
use crate::envelope::Page;
use crate::error::Result;
use crate::id::IntoResourceId;
use crate::resource_type::ResourceType;

/// Operations on `/api/v1/cases`. Cases are opened through interactions,
/// so there is no `create`.
#[derive(Debug)]
pub struct Cases<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Cases<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Cases),
        }
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<Case> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<Case>> {
        self.endpoint
            .list(&ResourceType::Cases.collection_path(), count, page)
            .await
    }

    /// Send `fields` verbatim as a partial update and return the updated
    /// case. An empty `fields` map fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// and nothing is sent.
    pub async fn update(&self, id: impl IntoResourceId, fields: impl Into<Params>) -> Result<Case> {
        let id = id.into_resource_id()?;
        self.endpoint.update(id, fields.into()).await
    }
}
