//! Validated entity identifiers.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Server-assigned identifier: always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(NonZeroU64);

impl ResourceId {
    /// `None` for zero.
    pub const fn new(id: u64) -> Option<Self> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<ResourceId> for u64 {
    fn from(id: ResourceId) -> Self {
        id.get()
    }
}

impl PartialEq<u64> for ResourceId {
    fn eq(&self, other: &u64) -> bool {
        self.get() == *other
    }
}

/// Anything a caller may pass where an identifier is expected.
///
/// Integers must be positive; strings must be integer-like (`"3456"`).
/// Conversion happens before any request is built, so a bad identifier never
/// reaches the transport.
pub trait IntoResourceId {
    fn into_resource_id(self) -> Result<ResourceId>;
}

impl IntoResourceId for ResourceId {
    fn into_resource_id(self) -> Result<ResourceId> {
        Ok(self)
    }
}

impl IntoResourceId for u64 {
    fn into_resource_id(self) -> Result<ResourceId> {
        ResourceId::new(self).ok_or_else(|| Error::invalid_argument("id must be a positive integer, got 0"))
    }
}

impl IntoResourceId for i64 {
    fn into_resource_id(self) -> Result<ResourceId> {
        u64::try_from(self)
            .ok()
            .and_then(ResourceId::new)
            .ok_or_else(|| Error::invalid_argument(format!("id must be a positive integer, got {self}")))
    }
}

macro_rules! widen_into_resource_id {
    ($($ty:ty => $wide:ty),* $(,)?) => {
        $(
            impl IntoResourceId for $ty {
                fn into_resource_id(self) -> Result<ResourceId> {
                    <$wide>::from(self).into_resource_id()
                }
            }
        )*
    };
}

widen_into_resource_id!(u32 => u64, u16 => u64, i32 => i64, i16 => i64);

impl IntoResourceId for usize {
    fn into_resource_id(self) -> Result<ResourceId> {
        u64::try_from(self)
            .map_err(|_| Error::invalid_argument(format!("id {self} is out of range")))?
            .into_resource_id()
    }
}

impl IntoResourceId for &str {
    fn into_resource_id(self) -> Result<ResourceId> {
        self.parse::<u64>()
            .ok()
            .and_then(ResourceId::new)
            .ok_or_else(|| Error::invalid_argument(format!("id must be a positive integer, got {self:?}")))
    }
}

impl IntoResourceId for &String {
    fn into_resource_id(self) -> Result<ResourceId> {
        self.as_str().into_resource_id()
    }
}

impl IntoResourceId for String {
    fn into_resource_id(self) -> Result<ResourceId> {
        self.as_str().into_resource_id()
    }
}
