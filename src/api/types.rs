//! Wine types for the WestWine REST API.
//!
//! The record schema is owned by the server, so wines travel through the
//! client as untyped JSON. Callers who know the shape can use the `_as`
//! variants on [`WineClient`](crate::api::WineClient) to deserialize into
//! their own types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single wine record, exactly as the server returned it.
pub type Wine = serde_json::Value;

/// Body of the wine collection endpoint.
///
/// The server is expected to return an array of [`Wine`] records, but the
/// shape is not checked, so this stays an untyped JSON value.
pub type WineList = serde_json::Value;

/// Identifier addressing a single wine resource.
///
/// Opaque to the client: numeric and string ids are both accepted and are
/// only ever used as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WineId(String);

impl WineId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as it will appear in the request path (before percent-encoding).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for WineId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

macro_rules! wine_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for WineId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

wine_id_from_int!(u32, u64, i32, i64);
