use desk_api_client::{Params, Transport};

use super::{require_non_empty, Endpoint};
use crate::customers::Customer;
use crate::envelope::Page;
use crate::error::Result;
use crate::id::{IntoResourceId, ResourceId};
use crate::resource_type::ResourceType;

/// Operations on `/api/v1/customers`.
#[derive(Debug)]
pub struct Customers<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Customers<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Customers),
        }
    }

    pub async fn create(&self, first_name: &str, last_name: &str) -> Result<ResourceId> {
        require_non_empty("first_name", first_name)?;
        require_non_empty("last_name", last_name)?;

        let body = Params::new()
            .with("first_name", first_name)
            .with("last_name", last_name);
        self.endpoint
            .create(&ResourceType::Customers.collection_path(), body)
            .await
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<Customer> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<Customer>> {
        self.endpoint
            .list(&ResourceType::Customers.collection_path(), count, page)
            .await
    }

    /// Send `fields` verbatim as a partial update and return the updated
    /// customer. An empty `fields` map fails with
    /// [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// and nothing is sent.
    pub async fn update(
        &self,
        id: impl IntoResourceId,
        fields: impl Into<Params>,
    ) -> Result<Customer> {
        let id = id.into_resource_id()?;
        self.endpoint.update(id, fields.into()).await
    }
}
