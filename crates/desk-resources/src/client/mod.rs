//! Desk resource clients.
//!
//! [`DeskClient`] owns a [`Transport`] and hands out one borrowed handle per
//! resource type. Every operation validates its arguments first, then issues
//! exactly one transport call and decodes the reply envelope.

use desk_api_client::{ClientConfig, Credentials, DeskHttpClient, Params, Transport};
use tracing::{debug, instrument};

use crate::envelope::{
    decode_acknowledgement, decode_created_id, decode_entity, decode_page, Page, Resource,
};
use crate::error::{Error, Result};
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

mod articles;
mod cases;
mod customers;
mod interactions;
mod macros;
mod topics;
mod users;

pub use articles::Articles;
pub use cases::Cases;
pub use customers::Customers;
pub use interactions::Interactions;
pub use macros::Macros;
pub use topics::Topics;
pub use users::{UserGroups, Users};

/// Entry point to the Desk resource API.
///
/// Generic over the transport so tests can substitute a recording mock; the
/// default is the reqwest-backed [`DeskHttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use desk_api_client::Credentials;
/// use desk_api_resources::DeskClient;
///
/// let desk = DeskClient::new("https://acme.desk.com", Credentials::from_env()?)?;
///
/// let id = desk.topics().create("Billing", "Invoices and refunds", true).await?;
/// let topic = desk.topics().retrieve(id).await?;
/// desk.topics().update_translation(id, "de", "Abrechnung").await?;
/// desk.topics().destroy(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DeskClient<T = DeskHttpClient> {
    transport: T,
}

impl DeskClient<DeskHttpClient> {
    /// Connect to a Desk site with the default HTTP configuration.
    ///
    /// A site URL that is not `http(s)` fails with [`ErrorKind::Config`](crate::ErrorKind::Config).
    pub fn new(site_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let transport = DeskHttpClient::new(site_url, credentials)?;
        Ok(Self { transport })
    }

    /// Connect to a Desk site with custom HTTP configuration.
    pub fn with_config(
        site_url: impl Into<String>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let transport = DeskHttpClient::with_config(site_url, credentials, config)?;
        Ok(Self { transport })
    }
}

impl<T: Transport> DeskClient<T> {
    /// Wrap an existing transport.
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    pub fn topics(&self) -> Topics<'_, T> {
        Topics::new(&self.transport)
    }

    pub fn articles(&self) -> Articles<'_, T> {
        Articles::new(&self.transport)
    }

    pub fn macros(&self) -> Macros<'_, T> {
        Macros::new(&self.transport)
    }

    pub fn cases(&self) -> Cases<'_, T> {
        Cases::new(&self.transport)
    }

    pub fn customers(&self) -> Customers<'_, T> {
        Customers::new(&self.transport)
    }

    pub fn interactions(&self) -> Interactions<'_, T> {
        Interactions::new(&self.transport)
    }

    pub fn users(&self) -> Users<'_, T> {
        Users::new(&self.transport)
    }

    pub fn user_groups(&self) -> UserGroups<'_, T> {
        UserGroups::new(&self.transport)
    }
}

/// The shared request/decode steps behind every resource handle.
#[derive(Debug)]
pub(crate) struct Endpoint<'a, T> {
    transport: &'a T,
    resource: ResourceType,
}

impl<'a, T: Transport> Endpoint<'a, T> {
    pub(crate) fn new(transport: &'a T, resource: ResourceType) -> Self {
        Self {
            transport,
            resource,
        }
    }

    /// POST `body` to `path` and return the new entity's id.
    #[instrument(skip_all, fields(resource = %self.resource, path = %path))]
    pub(crate) async fn create(&self, path: &str, body: Params) -> Result<ResourceId> {
        let response = self.transport.post(path, &body).await?;
        let id = decode_created_id(&response, self.resource)?;
        debug!(%id, "created");
        Ok(id)
    }

    #[instrument(skip_all, fields(resource = %self.resource, id = %id))]
    pub(crate) async fn retrieve<R: Resource>(&self, id: ResourceId) -> Result<R> {
        let response = self
            .transport
            .get(&self.resource.member_path(id), &Params::new())
            .await?;
        decode_entity(&response)
    }

    /// GET one page of the collection at `path`.
    #[instrument(skip_all, fields(resource = %self.resource, path = %path, count = count, page = page))]
    pub(crate) async fn list<R: Resource>(
        &self,
        path: &str,
        count: u32,
        page: u32,
    ) -> Result<Page<R>> {
        let query = page_query(count, page)?;
        let response = self.transport.get(path, &query).await?;
        let page = decode_page(&response)?;
        debug!(entries = page.len(), total = ?page.total, "listed");
        Ok(page)
    }

    /// PUT `fields` verbatim. Rejects an empty map without dispatching.
    #[instrument(skip_all, fields(resource = %self.resource, id = %id, fields = fields.len()))]
    pub(crate) async fn update<R: Resource>(&self, id: ResourceId, fields: Params) -> Result<R> {
        if fields.is_empty() {
            return Err(Error::invalid_argument(format!(
                "update of {} {id} needs at least one field",
                self.resource.entity_key()
            )));
        }
        let response = self
            .transport
            .put(&self.resource.member_path(id), &fields)
            .await?;
        decode_entity(&response)
    }

    #[instrument(skip_all, fields(resource = %self.resource, id = %id))]
    pub(crate) async fn destroy(&self, id: ResourceId) -> Result<()> {
        let response = self
            .transport
            .delete(&self.resource.member_path(id), &Params::new())
            .await?;
        decode_acknowledgement(&response)?;
        debug!("destroyed");
        Ok(())
    }
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_argument(format!("{field} must not be empty")));
    }
    Ok(())
}

fn page_query(count: u32, page: u32) -> Result<Params> {
    if count == 0 {
        return Err(Error::invalid_argument("count must be at least 1"));
    }
    if page == 0 {
        return Err(Error::invalid_argument("page must be at least 1"));
    }
    Ok(Params::new().with("count", count).with("page", page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_api_client::mock::MockTransport;
    use desk_api_client::Response;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_page_query() {
        assert_eq!(
            page_query(1, 2).unwrap(),
            Params::new().with("count", 1).with("page", 2)
        );
        assert!(page_query(0, 1).unwrap_err().is_invalid_argument());
        assert!(page_query(1, 0).unwrap_err().is_invalid_argument());
    }

    #[tokio::test]
    async fn test_handles_share_one_transport() {
        let desk = DeskClient::from_transport(MockTransport::new());
        desk.transport()
            .respond_with(Response::new(json!({"topic": {"id": 1, "name": "a", "show_in_portal": true}})))
            .respond_with(Response::new(json!({"user": {"id": 2, "name": "b", "email": "b@example.com"}})));

        let topic = desk.topics().retrieve(1u64).await.unwrap();
        let user = desk.users().retrieve(2u64).await.unwrap();

        assert_eq!(topic.name, "a");
        assert_eq!(user.email, "b@example.com");
        let paths: Vec<String> = desk.transport().calls().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, ["/api/v1/topics/1.json", "/api/v1/users/2.json"]);
    }

    #[tokio::test]
    async fn test_shared_transport_across_tasks() {
        let transport = Arc::new(MockTransport::new());
        transport
            .respond_with(Response::new(json!({"success": true})))
            .respond_with(Response::new(json!({"success": true})));

        let desk = DeskClient::from_transport(Arc::clone(&transport));
        let other = DeskClient::from_transport(Arc::clone(&transport));

        let first = tokio::spawn(async move { desk.macros().destroy(10u64).await });
        let second = tokio::spawn(async move { other.topics().destroy(11u64).await });
        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();

        assert_eq!(transport.call_count(), 2);
        assert_eq!(transport.pending_replies(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_kept_as_source() {
        let desk = DeskClient::from_transport(MockTransport::new());
        desk.transport().fail_with(desk_api_client::Error::new(
            desk_api_client::ErrorKind::NotFound("Resource Not Found".into()),
        ));

        let err = desk.cases().retrieve(404u64).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.transport_error().unwrap().is_not_found());
    }

    #[test]
    fn test_new_rejects_bad_site_url() {
        let err = DeskClient::new("ftp://acme.desk.com", Credentials::bearer("t")).unwrap_err();
        assert!(err.is_config());
        assert!(!err.is_transport());
    }
}
