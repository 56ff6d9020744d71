//! # desk-client
//!
//! Transport layer for the Desk helpdesk REST API.
//!
//! This crate provides:
//! - The [`Transport`] capability (`get`/`post`/`put`/`delete`) that the
//!   resource clients are written against
//! - [`DeskHttpClient`], a reqwest implementation of it
//! - [`Response`], a reply with its JSON body parsed, plus envelope helpers
//! - [`Params`], the ordered query/body mapping
//! - `mock::MockTransport` (feature `mock`) for tests
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource clients                         │
//! │  (desk-resources: topics, articles, cases, ...)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Transport
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    DeskHttpClient                           │
//! │  - Site URL + credentials + reqwest client                  │
//! │  - One round trip per call, no retry                        │
//! │  - Error envelope -> Error                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use desk_api_client::{Credentials, DeskHttpClient, Params, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), desk_api_client::Error> {
//!     let transport = DeskHttpClient::new("https://acme.desk.com", Credentials::from_env()?)?;
//!
//!     let response = transport
//!         .get("/api/v1/topics.json", &Params::new().with("count", 10).with("page", 1))
//!         .await?;
//!     println!("{}", response.body());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod request;
mod response;
mod transport;

pub use client::DeskHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{Params, RequestMethod};
pub use response::Response;
pub use transport::Transport;

/// Version segment of every API path.
pub const API_VERSION: &str = "v1";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("desk-api/", env!("CARGO_PKG_VERSION"));
