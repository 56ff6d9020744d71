use desk_api_client::Transport;

use super::Endpoint;
use crate::envelope::Page;
use crate::error::Result;
use crate::id::IntoResourceId;
use crate::resource_type::ResourceType;
use crate::users::{User, UserGroup};

/// Read-only access to `/api/v1/users`.
#[derive(Debug)]
pub struct Users<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Users<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Users),
        }
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<User> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<User>> {
        self.endpoint
            .list(&ResourceType::Users.collection_path(), count, page)
            .await
    }
}

/// Read-only access to `/api/v1/user_groups`.
#[derive(Debug)]
pub struct UserGroups<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> UserGroups<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::UserGroups),
        }
    }

    pub async fn retrieve(&self, id: impl IntoResourceId) -> Result<UserGroup> {
        let id = id.into_resource_id()?;
        self.endpoint.retrieve(id).await
    }

    pub async fn retrieve_all(&self, count: u32, page: u32) -> Result<Page<UserGroup>> {
        self.endpoint
            .list(&ResourceType::UserGroups.collection_path(), count, page)
            .await
    }
}
