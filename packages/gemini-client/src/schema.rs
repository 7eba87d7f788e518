//! Type-safe schema generation for Gemini structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from
//! Rust types, then rewrites them into the OpenAPI-style dialect the Gemini
//! `responseSchema` field accepts.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use gemini_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Summary {
//!     summary: String,
//! }
//!
//! let schema = Summary::gemini_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Formats Gemini accepts on NUMBER/INTEGER schemas. Anything else
/// (schemars emits e.g. "uint32") is dropped.
const ALLOWED_FORMATS: &[&str] = &["int32", "int64", "float", "double"];

/// Trait for types that can be used as Gemini structured output.
///
/// Automatically implemented for any type that implements
/// `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a Gemini-compatible JSON schema for this type.
    ///
    /// The Gemini `responseSchema` dialect differs from draft-07 JSON
    /// schema:
    /// 1. No `$ref`/`definitions` — everything must be inlined
    /// 2. No `additionalProperties`, `$schema`, or `title` keys
    /// 3. `type` values are upper-case enum names (`OBJECT`, `STRING`, ...)
    /// 4. Optionality is expressed with `nullable`, not `type: [T, "null"]`
    ///
    /// This method transforms the schemars output to meet these
    /// requirements.
    fn gemini_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Inline all $ref references
        inline_refs(&mut value);

        // Step 2: Rewrite every subschema into the Gemini dialect
        sanitize(&mut value);

        // Step 3: Remove the definitions section and $schema
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Rewrite a schema tree into the Gemini dialect (see [`StructuredOutput`]).
fn sanitize(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            map.remove("additionalProperties");
            map.remove("title");

            // schemars encodes Option<T> as `"type": ["T", "null"]`
            if let Some(serde_json::Value::Array(types)) = map.get("type").cloned() {
                let nullable = types.iter().any(|t| t.as_str() == Some("null"));
                let concrete = types
                    .iter()
                    .find(|t| t.as_str() != Some("null"))
                    .cloned()
                    .unwrap_or(serde_json::Value::String("string".to_string()));
                map.insert("type".to_string(), concrete);
                if nullable {
                    map.insert("nullable".to_string(), serde_json::Value::Bool(true));
                }
            }

            if let Some(serde_json::Value::String(ty)) = map.get_mut("type") {
                *ty = ty.to_uppercase();
            }

            if let Some(serde_json::Value::String(format)) = map.get("format").cloned() {
                if !ALLOWED_FORMATS.contains(&format.as_str()) {
                    map.remove("format");
                }
            }

            for (_, v) in map.iter_mut() {
                sanitize(v);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                sanitize(item);
            }
        }
        _ => {}
    }
}

/// Inline all $ref references by replacing them with the actual schema from
/// definitions.
fn inline_refs(value: &mut serde_json::Value) {
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        *value = def.clone();
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}
