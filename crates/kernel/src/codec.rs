//! Exchange-document encode/decode for export and import.
//!
//! The exchange format is a flat JSON document:
//!
//! ```json
//! {
//!   "version": "0.1.0",
//!   "settings": { "apply_to": "role" },
//!   "order": ["posts", "separator3", "media"],
//!   "hidden": ["media"],
//!   "role": "editor"
//! }
//! ```
//!
//! `order` and `hidden` are mandatory even when empty; `settings` and
//! `role` are optional (`role` only appears on role-scoped exports).
//! Decoding validates shape and sanitizes entries — it never checks slugs
//! against a live host list. That referential validation happens lazily at
//! reconciliation, where stale slugs are inert.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ApplyTo, ConfigDocument, PluginSettings};
use crate::error::KernelError;

/// Portable export of one scope's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeDocument {
    /// Version of the engine that produced the document.
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ExchangeSettings>,

    pub order: Vec<String>,
    pub hidden: Vec<String>,

    /// Present only for role-scoped exports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The settings subset that travels with an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeSettings {
    pub apply_to: ApplyTo,
}

/// Decode failures. Anything beyond these is handled by sanitization.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input is not well-formed JSON.
    #[error("not well-formed JSON: {0}")]
    MalformedSyntax(#[from] serde_json::Error),

    /// `order` or `hidden` is absent or not a list.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl From<DecodeError> for KernelError {
    fn from(error: DecodeError) -> Self {
        KernelError::Validation(error.to_string())
    }
}

/// Build the exchange document for one scope.
pub fn encode(
    config: &ConfigDocument,
    settings: &PluginSettings,
    scope_role: Option<&str>,
) -> ExchangeDocument {
    ExchangeDocument {
        version: env!("CARGO_PKG_VERSION").to_string(),
        settings: Some(ExchangeSettings {
            apply_to: settings.apply_to,
        }),
        order: config.order.clone(),
        hidden: config.hidden.clone(),
        role: scope_role.map(ToString::to_string),
    }
}

/// Parse and sanitize a raw exchange document.
///
/// Within `order`/`hidden`, non-string and empty entries are dropped and
/// duplicates collapse to their first occurrence. An unknown
/// `settings.apply_to` decodes as [`ApplyTo::All`]; a missing `version`
/// decodes as an empty string (old exports carried none).
pub fn decode(raw: &str) -> Result<ExchangeDocument, DecodeError> {
    let value: Value = serde_json::from_str(raw)?;

    let Some(object) = value.as_object() else {
        return Err(DecodeError::MissingFields(vec!["order", "hidden"]));
    };

    let mut missing = Vec::new();
    let order = match object.get("order") {
        Some(Value::Array(items)) => sanitize_slug_list(items),
        _ => {
            missing.push("order");
            Vec::new()
        }
    };
    let hidden = match object.get("hidden") {
        Some(Value::Array(items)) => sanitize_slug_list(items),
        _ => {
            missing.push("hidden");
            Vec::new()
        }
    };
    if !missing.is_empty() {
        return Err(DecodeError::MissingFields(missing));
    }

    let settings = object
        .get("settings")
        .and_then(|settings| settings.get("apply_to"))
        .and_then(Value::as_str)
        .map(|mode| ExchangeSettings {
            apply_to: ApplyTo::from_lossy(mode),
        });

    let role = object
        .get("role")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .map(ToString::to_string);

    let version = object
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(ExchangeDocument {
        version,
        settings,
        order,
        hidden,
        role,
    })
}

/// Keep string elements, trimmed and non-empty, first occurrence wins.
fn sanitize_slug_list(items: &[Value]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for item in items {
        if let Some(slug) = item.as_str() {
            let slug = slug.trim();
            if !slug.is_empty() && seen.insert(slug.to_string()) {
                out.push(slug.to_string());
            }
        }
    }

    out
}
