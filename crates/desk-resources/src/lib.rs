//! # desk-api-resources
//!
//! Typed resource clients for the Desk helpdesk REST API (v1).
//!
//! ## Resources
//!
//! | Handle | Operations |
//! |---|---|
//! | [`Topics`] | create, retrieve, retrieve_all, update, update_translation, destroy |
//! | [`Articles`] | create, retrieve, retrieve_all, update, update_translation, destroy |
//! | [`Macros`] | create, retrieve, retrieve_all, update, destroy |
//! | [`Cases`] | retrieve, retrieve_all, update |
//! | [`Customers`] | create, retrieve, retrieve_all, update |
//! | [`Interactions`] | create |
//! | [`Users`], [`UserGroups`] | retrieve, retrieve_all |
//!
//! Every operation checks its arguments before touching the transport: an
//! empty name or a non-numeric id fails with [`ErrorKind::InvalidArgument`]
//! and nothing is sent. Transport failures come back as
//! [`ErrorKind::Transport`] with the original error attached; replies that
//! are not JSON or lack the expected envelope fail with
//! [`ErrorKind::Decoding`]. A client that cannot be set up fails with
//! [`ErrorKind::Config`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use desk_api_client::Credentials;
//! use desk_api_resources::DeskClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), desk_api_resources::Error> {
//!     let desk = DeskClient::new("https://acme.desk.com", Credentials::from_env()?)?;
//!
//!     let id = desk.topics().create("Billing", "", true).await?;
//!     for topic in desk.topics().retrieve_all(50, 1).await? {
//!         println!("{} {}", topic.id, topic.name);
//!     }
//!     desk.topics().destroy(id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod articles;
pub mod cases;
mod client;
pub mod customers;
mod envelope;
mod error;
mod id;
pub mod macros;
mod resource_type;
pub mod topics;
pub mod users;

// Main client and per-resource handles
pub use client::{
    Articles, Cases, Customers, DeskClient, Interactions, Macros, Topics, UserGroups, Users,
};

// Entities
pub use articles::Article;
pub use cases::Case;
pub use customers::Customer;
pub use macros::Macro;
pub use topics::Topic;
pub use users::{User, UserGroup};

pub use envelope::{Page, Resource};
pub use error::{Error, ErrorKind, Result};
pub use id::{IntoResourceId, ResourceId};
pub use resource_type::ResourceType;
