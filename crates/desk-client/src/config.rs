//! Knobs for the HTTP client that talks to a Desk site.
//!
//! The defaults suit an interactive integration: one Desk API round trip
//! should finish well inside 30 seconds, and a site rarely needs more than a
//! handful of pooled connections.

use std::time::Duration;

/// How [`DeskHttpClient`](crate::DeskHttpClient) builds its connection pool
/// and what it sends with every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upper bound on one Desk API round trip, body included.
    pub timeout: Duration,
    /// Upper bound on reaching the site's TLS endpoint.
    pub connect_timeout: Duration,
    /// How long an unused keep-alive connection to the site is kept.
    pub pool_idle_timeout: Duration,
    /// Keep-alive connections held open to the site.
    pub pool_max_idle_per_host: usize,
    /// Sent as `User-Agent`; defaults to `desk-api/<version>`.
    pub user_agent: String,
    /// Emit a `debug` event per request and per reply status.
    pub enable_tracing: bool,
    /// Ask Desk for gzip bodies. List pages shrink a lot.
    pub accept_compressed: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
            accept_compressed: true,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults and override what differs.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Chained setters over [`ClientConfig::default`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Bound each Desk API round trip.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Keep at most `max` idle connections to the site.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Identify the integration to Desk support, e.g. `helpdesk-sync/1.0`.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Turn the per-request `debug` events on or off.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.accept_compressed = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
