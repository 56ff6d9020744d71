//! reqwest-backed transport for a Desk site.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{Params, RequestMethod};
use crate::response::{parse_error_response, Response};
use crate::transport::Transport;

/// HTTP transport for one Desk site.
///
/// Each call is a single round trip: there is no retry, caching or request
/// queueing here. Non-2xx replies are turned into [`Error`]s.
#[derive(Debug, Clone)]
pub struct DeskHttpClient {
    inner: reqwest::Client,
    site_url: String,
    credentials: Credentials,
    config: ClientConfig,
}

impl DeskHttpClient {
    /// Create a transport for `site_url` (e.g. `https://acme.desk.com`) with
    /// the default configuration.
    pub fn new(site_url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::with_config(site_url, credentials, ClientConfig::default())
    }

    /// Create a transport with custom configuration.
    pub fn with_config(
        site_url: impl Into<String>,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let site_url = site_url.into().trim_end_matches('/').to_string();
        let parsed = Url::parse(&site_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            ))));
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            site_url,
            credentials,
            config,
        })
    }

    /// Get the site URL (without a trailing slash).
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{}", self.site_url, path))?)
    }

    /// Execute a single request.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    async fn execute(&self, method: RequestMethod, path: &str, params: &Params) -> Result<Response> {
        let mut url = self.url(path)?;
        if method == RequestMethod::Get && !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.to_query_pairs());
        }

        let mut request = self
            .inner
            .request(method.to_reqwest(), url.clone())
            .header(ACCEPT, "application/json");
        request = self.credentials.apply(request);

        request = match method {
            RequestMethod::Post | RequestMethod::Put => request.json(params),
            RequestMethod::Delete if !params.is_empty() => request.json(params),
            _ => request,
        };

        if self.config.enable_tracing {
            debug!(method = %method, url = %url, "Sending request");
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs);
        let text = response.text().await?;

        if self.config.enable_tracing {
            if (200..300).contains(&status) {
                debug!(status, bytes = text.len(), "Response received");
            } else {
                info!(status, bytes = text.len(), "Non-success response");
            }
        }

        if !(200..300).contains(&status) {
            return Err(parse_error_response(status, &text, retry_after));
        }

        Response::from_parts(status, &text)
    }
}

impl Transport for DeskHttpClient {
    async fn get(&self, path: &str, query: &Params) -> Result<Response> {
        self.execute(RequestMethod::Get, path, query).await
    }

    async fn post(&self, path: &str, body: &Params) -> Result<Response> {
        self.execute(RequestMethod::Post, path, body).await
    }

    async fn put(&self, path: &str, body: &Params) -> Result<Response> {
        self.execute(RequestMethod::Put, path, body).await
    }

    async fn delete(&self, path: &str, body: &Params) -> Result<Response> {
        self.execute(RequestMethod::Delete, path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DeskHttpClient {
        DeskHttpClient::new(server.uri(), Credentials::bearer("test-token")).unwrap()
    }

    #[test]
    fn test_url_building() {
        let client =
            DeskHttpClient::new("https://acme.desk.com/", Credentials::bearer("t")).unwrap();

        assert_eq!(client.site_url(), "https://acme.desk.com");
        assert_eq!(
            client.url("/api/v1/topics.json").unwrap().as_str(),
            "https://acme.desk.com/api/v1/topics.json"
        );
        assert_eq!(
            client.url("api/v1/topics/12.json").unwrap().as_str(),
            "https://acme.desk.com/api/v1/topics/12.json"
        );
    }

    #[test]
    fn test_rejects_bad_site_url() {
        let err = DeskHttpClient::new("acme.desk.com", Credentials::bearer("t")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));

        let err = DeskHttpClient::new("ftp://acme.desk.com", Credentials::bearer("t")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_get_sends_query_and_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/topics.json"))
            .and(query_param("count", "1"))
            .and(query_param("page", "2"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [],
                "page": 2,
                "count": 1,
                "total": 0
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .get(
                "/api/v1/topics.json",
                &Params::new().with("count", 1).with("page", 2),
            )
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.lookup("total"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/topics.json"))
            .and(body_json(json!({"name": "abcd", "show_in_portal": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "results": {"topic": {"id": 1234}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .post(
                "/api/v1/topics.json",
                &Params::new().with("name", "abcd").with("show_in_portal", true),
            )
            .await
            .unwrap();

        assert_eq!(response.lookup("results.topic.id"), Some(&json!(1234)));
    }

    #[tokio::test]
    async fn test_delete_with_empty_reply() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/v1/topics/6789.json"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let response = client
            .delete("/api/v1/topics/6789.json", &Params::new())
            .await
            .unwrap();

        assert_eq!(response.status(), 204);
        assert!(response.body().is_null());
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/v1/topics/4567.json"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "success": false,
                "errors": {"name": ["can't be blank"]}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .put("/api/v1/topics/4567.json", &Params::new().with("name", ""))
            .await
            .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::Api { status: 422, ref message } if message == "name can't be blank"));
    }

    #[tokio::test]
    async fn test_rate_limiting_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/cases.json"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "30"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .get("/api/v1/cases.json", &Params::new())
            .await
            .unwrap_err();

        assert!(err.is_rate_limited());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
    }

    #[tokio::test]
    async fn test_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/topics/1.json"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "Resource Not Found"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .get("/api/v1/topics/1.json", &Params::new())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }
}
