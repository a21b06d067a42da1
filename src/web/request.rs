//! Lenient extraction of request fields from JSON bodies.
//!
//! Bodies are parsed into a [`serde_json::Value`] first so that a missing or
//! mistyped field falls back to its default instead of rejecting the whole
//! request. Required fields are then checked by the engines themselves.

use serde_json::Value;

use crate::matching::equipment::{DEFAULT_BUDGET, DEFAULT_SKILL_LEVEL};

/// Parse a request body, treating anything that isn't JSON as an empty payload
#[must_use]
pub fn parse_json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

/// String entries of an array field; other entries are skipped
fn string_list(payload: &Value, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeRequest {
    pub concept1: String,
    pub concept2: String,
}

impl MergeRequest {
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            concept1: string_field(payload, "concept1").unwrap_or_default(),
            concept2: string_field(payload, "concept2").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    pub components: Vec<String>,
}

impl OptimizeRequest {
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            components: string_list(payload, "components"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestRequest {
    pub equipment: Vec<String>,
    pub skill_level: String,
    pub budget: f64,
}

impl SuggestRequest {
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            equipment: string_list(payload, "equipment"),
            skill_level: string_field(payload, "skill_level")
                .unwrap_or_else(|| DEFAULT_SKILL_LEVEL.to_string()),
            budget: payload
                .get("budget")
                .and_then(Value::as_f64)
                .filter(|b| b.is_finite())
                .unwrap_or(DEFAULT_BUDGET),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn from_value(payload: &Value) -> Self {
        Self {
            message: string_field(payload, "message").unwrap_or_default(),
        }
    }
}
