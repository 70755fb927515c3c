//! JSON-encoded Micropub requests.
//!
//! Creations carry a `type` array and a `properties` object whose values
//! are arrays. Actions carry `action` and `url`; updates additionally carry
//! any of `replace`, `add` and `delete`.
//!
//! Malformed leaves (a property that is not an array, a delta entry that is
//! not an array) are dropped without failing the request.

use serde_json::{Map, Value};

use super::{action_and_url, file_field, log_rejection, non_empty_object};
use crate::error::DecodeError;
use crate::options::{DecodeOptions, NEVER_PROPERTIES};
use crate::request::{Action, Creation, Deletion, Properties, Request, Update};

/// Decode a JSON body, returning `None` if it is not a valid request.
pub fn decode_json(body: &Value) -> Option<Request> {
    try_decode_json(body).ok()
}

pub fn decode_json_with(body: &Value, options: &DecodeOptions) -> Option<Request> {
    try_decode_json_with(body, options).ok()
}

/// Decode a JSON body, reporting why it was rejected.
pub fn try_decode_json(body: &Value) -> Result<Request, DecodeError> {
    try_decode_json_with(body, &DecodeOptions::default())
}

pub fn try_decode_json_with(body: &Value, options: &DecodeOptions) -> Result<Request, DecodeError> {
    let result = decode(body, options);
    log_rejection("json", &result);
    result
}

/// Parse JSON text and decode it.
pub fn decode_json_str(text: &str) -> Option<Request> {
    let body: Value = serde_json::from_str(text).ok()?;
    decode_json(&body)
}

fn decode(body: &Value, options: &DecodeOptions) -> Result<Request, DecodeError> {
    let map = non_empty_object(body)?;

    if let Some(first) = map.get("type").and_then(Value::as_array).and_then(|t| t.first()) {
        let type_name = first.as_str().ok_or(DecodeError::InvalidType)?;
        return decode_creation(type_name, map, options).map(Request::Create);
    }

    let (action, url) = action_and_url(map)?.ok_or(DecodeError::MissingDiscriminator)?;
    let mut action = Action::new(action, url);
    if let Some(update) = action.update.as_mut() {
        decode_update(update, map);
    }
    Ok(Request::Action(action))
}

fn decode_creation(
    type_name: &str,
    map: &Map<String, Value>,
    options: &DecodeOptions,
) -> Result<Creation, DecodeError> {
    let properties = map
        .get("properties")
        .and_then(Value::as_object)
        .filter(|p| !p.is_empty())
        .ok_or(DecodeError::MissingProperties)?;

    let mut creation = Creation::new(type_name);
    for (key, value) in properties {
        if NEVER_PROPERTIES.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Array(items) if !items.is_empty() => {
                file_field(&mut creation, key, items.clone(), options)
            }
            _ => tracing::trace!(
                key = key.as_str(),
                "dropping property that is not a non-empty array"
            ),
        }
    }
    Ok(creation)
}

fn decode_update(update: &mut Update, map: &Map<String, Value>) {
    for flag in ["replace", "add", "delete"] {
        match map.get(flag) {
            None => {}
            Some(Value::Array(names)) if flag == "delete" => {
                update.delete = Deletion::Properties(property_names(names));
            }
            Some(Value::Object(entries)) => {
                let entries = array_entries(flag, entries);
                match flag {
                    "replace" => update.replace = entries,
                    "add" => update.add = entries,
                    _ => update.delete = Deletion::Values(entries),
                }
            }
            Some(_) => tracing::trace!(flag, "ignoring malformed update field"),
        }
    }
}

/// Keeps the entries whose value is an array.
fn array_entries(flag: &str, entries: &Map<String, Value>) -> Properties {
    entries
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Array(items) => Some((key.clone(), items.clone())),
            _ => {
                tracing::trace!(
                    flag,
                    key = key.as_str(),
                    "dropping update entry that is not an array"
                );
                None
            }
        })
        .collect()
}

fn property_names(names: &[Value]) -> Vec<String> {
    names
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
