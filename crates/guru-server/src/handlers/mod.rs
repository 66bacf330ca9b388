//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod health;
pub mod tags;
pub mod timeline;

// Re-export all handlers for use in router
pub use health::*;
pub use tags::*;
pub use timeline::*;

use axum::{extract::rejection::JsonRejection, Json};
use guru_core::{Error, Result};
use serde_json::{Map, Value};

/// Unwrap a JSON request body that must be an object
///
/// Unreadable bodies are internal failures, not missing fields.
pub(crate) fn json_object(
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Map<String, Value>> {
    let Json(body) = payload.map_err(|rejection| Error::InvalidData(rejection.body_text()))?;

    match body {
        Value::Object(map) => Ok(map),
        _ => Err(Error::InvalidData(
            "request body must be a JSON object".to_string(),
        )),
    }
}

/// Remove a top-level field, treating `null` as absent
pub(crate) fn take_field(body: &mut Map<String, Value>, key: &str) -> Option<Value> {
    body.remove(key).filter(|v| !v.is_null())
}
