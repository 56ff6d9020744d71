use desk_api_client::{Params, Transport};

use super::{require_non_empty, Endpoint};
use crate::error::Result;
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

/// Inbound interactions. Posting one files it against the customer with the
/// given email (creating the customer if needed) and opens a case.
#[derive(Debug)]
pub struct Interactions<'a, T> {
    endpoint: Endpoint<'a, T>,
}

impl<'a, T: Transport> Interactions<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            endpoint: Endpoint::new(transport, ResourceType::Interactions),
        }
    }

    /// Create an interaction and return its id.
    pub async fn create(&self, customer_email: &str, subject: &str, body: &str) -> Result<ResourceId> {
        require_non_empty("customer_email", customer_email)?;
        require_non_empty("interaction subject", subject)?;
        require_non_empty("interaction body", body)?;

        let params = Params::new()
            .with("customer_email", customer_email)
            .with("interaction_subject", subject)
            .with("interaction_body", body);
        self.endpoint
            .create(&ResourceType::Interactions.collection_path(), params)
            .await
    }
}
