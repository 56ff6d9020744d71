//! Decoding of Desk response envelopes.
//!
//! The API wraps every entity in its singular key. Four shapes occur:
//!
//! | Shape | Example |
//! |---|---|
//! | bare entity | `{"topic": {...}}` |
//! | wrapped entity | `{"success": true, "results": {"topic": {...}}}` |
//! | page | `{"results": [{"topic": {...}}], "page": 2, "count": 1, "total": 3}` |
//! | acknowledgement | `{"success": true}` |
//!
//! An envelope reporting `"success": false` never decodes, whatever its shape.

use desk_api_client::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::id::ResourceId;
use crate::resource_type::ResourceType;

/// A typed entity served under one [`ResourceType`].
pub trait Resource: DeserializeOwned {
    const TYPE: ResourceType;
}

/// One page of a `retrieve_all` listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub entries: Vec<T>,
    /// 1-based page number echoed by the server.
    pub page: Option<u64>,
    /// Page size echoed by the server.
    pub count: Option<u64>,
    /// Total number of entities across all pages.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Whether pages after this one exist. `false` when the server omitted
    /// any of the pagination fields.
    pub fn has_more(&self) -> bool {
        match (self.page, self.count, self.total) {
            (Some(page), Some(count), Some(total)) => page.saturating_mul(count) < total,
            _ => false,
        }
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn ensure_not_failed(response: &Response) -> Result<()> {
    if response.success() == Some(false) {
        let detail = response
            .error_message()
            .unwrap_or_else(|| "no error details".to_string());
        return Err(Error::decoding(format!(
            "server reported success: false ({detail})"
        )));
    }
    Ok(())
}

fn deserialize_entity<R: Resource>(value: &Value) -> Result<R> {
    let key = R::TYPE.entity_key();
    <R as Deserialize>::deserialize(value)
        .map_err(|err| Error::decoding_with(format!("invalid `{key}` object: {err}"), err))
}

/// A single entity, from `results.{key}` when the body has `results`,
/// otherwise from the top-level `{key}`.
pub(crate) fn decode_entity<R: Resource>(response: &Response) -> Result<R> {
    ensure_not_failed(response)?;

    let key = R::TYPE.entity_key();
    let (container, location) = match response.results() {
        Some(results) => (results, format!("results.{key}")),
        None => (response.body(), key.to_string()),
    };
    let entity = container
        .get(key)
        .ok_or_else(|| Error::decoding(format!("response has no `{location}` object")))?;

    deserialize_entity(entity)
}

/// The id of a freshly created entity, from `results.{key}.id`.
pub(crate) fn decode_created_id(response: &Response, resource: ResourceType) -> Result<ResourceId> {
    ensure_not_failed(response)?;

    let path = format!("results.{}.id", resource.entity_key());
    let value = response
        .lookup(&path)
        .ok_or_else(|| Error::decoding(format!("response has no `{path}`")))?;

    value
        .as_u64()
        .and_then(ResourceId::new)
        .ok_or_else(|| Error::decoding(format!("`{path}` is not a positive integer: {value}")))
}

/// A page of entities, each unwrapped from its `{key}` envelope.
pub(crate) fn decode_page<R: Resource>(response: &Response) -> Result<Page<R>> {
    ensure_not_failed(response)?;

    let key = R::TYPE.entity_key();
    let items = match response.results() {
        Some(Value::Array(items)) => items,
        Some(_) => return Err(Error::decoding("`results` is not an array")),
        None => return Err(Error::decoding("response has no `results` array")),
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let entity = item.get(key).ok_or_else(|| {
                Error::decoding(format!("`results.{index}` has no `{key}` object"))
            })?;
            deserialize_entity(entity)
        })
        .collect::<Result<Vec<R>>>()?;

    Ok(Page {
        entries,
        page: page_field(response, "page")?,
        count: page_field(response, "count")?,
        total: page_field(response, "total")?,
    })
}

fn page_field(response: &Response, name: &str) -> Result<Option<u64>> {
    match response.body().get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| Error::decoding(format!("`{name}` is not a non-negative integer: {value}"))),
    }
}

/// A bare `{"success": true}`.
pub(crate) fn decode_acknowledgement(response: &Response) -> Result<()> {
    ensure_not_failed(response)?;
    match response.success() {
        Some(true) => Ok(()),
        _ => Err(Error::decoding("response has no `success: true` acknowledgement")),
    }
}
