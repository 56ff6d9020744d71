//! # desk-api
//!
//! A client library for the Desk helpdesk REST API (v1).
//!
//! This library provides typed access to Desk resources with input
//! validation before anything is sent, one HTTP round trip per operation
//! and structured errors.
//!
//! ## Security
//!
//! - Credentials are redacted in Debug output
//! - Tracing spans never record credentials or request bodies
//! - Error messages echoed back by the server are sanitized
//!
//! ## Crates
//!
//! - **desk-api-client** - HTTP transport: the `Transport` trait, reqwest client, config, credentials
//! - **desk-api-resources** - Resource clients: topics, articles, macros, cases, customers, interactions, users
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use desk_api::{Credentials, DeskClient, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // DESK_TOKEN, or DESK_EMAIL and DESK_PASSWORD
//!     let desk = DeskClient::new("https://acme.desk.com", Credentials::from_env()?)?;
//!
//!     let id = desk.topics().create("Billing", "Invoices and refunds", true).await?;
//!     desk.topics()
//!         .update(id, Params::new().with("show_in_portal", false))
//!         .await?;
//!
//!     for topic in desk.topics().retrieve_all(50, 1).await? {
//!         println!("{} {}", topic.id, topic.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use desk_api_client as client;
#[cfg(feature = "resources")]
pub use desk_api_resources as resources;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use desk_api_client::{ClientConfig, Credentials, DeskHttpClient, Params, Transport};
#[cfg(feature = "resources")]
pub use desk_api_resources::{DeskClient, Page, ResourceId, ResourceType, Topic};
