//! The transport capability consumed by the resource clients.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::request::Params;
use crate::response::Response;

/// Four-verb capability that performs Desk API round trips.
///
/// Paths are absolute API paths such as `/api/v1/topics.json`; the
/// implementation decides how to reach the site. A GET carries `query` as a
/// query string, the other verbs carry `body` as the request payload.
///
/// Implementations must be safe to share: a single transport is reused by
/// every resource client, possibly from several tasks.
pub trait Transport: Send + Sync {
    fn get(&self, path: &str, query: &Params) -> impl Future<Output = Result<Response>> + Send;

    fn post(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send;

    fn put(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send;

    fn delete(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(&self, path: &str, query: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).get(path, query)
    }

    fn post(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).post(path, body)
    }

    fn put(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).put(path, body)
    }

    fn delete(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).delete(path, body)
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn get(&self, path: &str, query: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).get(path, query)
    }

    fn post(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).post(path, body)
    }

    fn put(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).put(path, body)
    }

    fn delete(&self, path: &str, body: &Params) -> impl Future<Output = Result<Response>> + Send {
        (**self).delete(path, body)
    }
}
