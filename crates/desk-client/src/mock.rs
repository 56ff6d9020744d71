//! In-memory [`Transport`] for unit tests.
//!
//! `MockTransport` records every call it receives and answers from a FIFO
//! queue of canned replies. Tests assert on the recorded calls afterwards,
//! including that no call happened at all.
//!
//! ```ignore
//! use desk_api_client::mock::MockTransport;
//! use desk_api_client::{Params, RequestMethod, Response, Transport};
//! use serde_json::json;
//!
//! # tokio_test_block_on(async {
//! let transport = MockTransport::new();
//! transport.respond_with(Response::new(json!({"success": true})));
//!
//! transport.delete("/api/v1/topics/1.json", &Params::new()).await.unwrap();
//!
//! let calls = transport.calls();
//! assert_eq!(calls[0].method, RequestMethod::Delete);
//! assert_eq!(calls[0].path, "/api/v1/topics/1.json");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, ErrorKind, Result};
use crate::request::{Params, RequestMethod};
use crate::response::Response;
use crate::transport::Transport;

/// One call received by a [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: RequestMethod,
    pub path: String,
    /// Query for GET, body for every other verb.
    pub params: Params,
}

impl RecordedCall {
    pub fn new(method: RequestMethod, path: impl Into<String>, params: Params) -> Self {
        Self {
            method,
            path: path.into(),
            params,
        }
    }
}

/// Recording transport with queued replies.
#[derive(Debug, Default)]
pub struct MockTransport {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<Result<Response>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn respond_with(&self, response: Response) -> &Self {
        lock(&self.replies).push_back(Ok(response));
        self
    }

    /// Queue a transport failure.
    pub fn fail_with(&self, error: Error) -> &Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Replies queued but not consumed yet.
    pub fn pending_replies(&self) -> usize {
        lock(&self.replies).len()
    }

    fn record(&self, method: RequestMethod, path: &str, params: &Params) -> Result<Response> {
        lock(&self.calls).push(RecordedCall::new(method, path, params.clone()));
        lock(&self.replies).pop_front().unwrap_or_else(|| {
            Err(Error::new(ErrorKind::Other(format!(
                "no reply queued for {method} {path}"
            ))))
        })
    }
}

// A panicking test thread must not hide the calls recorded before it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &Params) -> Result<Response> {
        self.record(RequestMethod::Get, path, query)
    }

    async fn post(&self, path: &str, body: &Params) -> Result<Response> {
        self.record(RequestMethod::Post, path, body)
    }

    async fn put(&self, path: &str, body: &Params) -> Result<Response> {
        self.record(RequestMethod::Put, path, body)
    }

    async fn delete(&self, path: &str, body: &Params) -> Result<Response> {
        self.record(RequestMethod::Delete, path, body)
    }
}
