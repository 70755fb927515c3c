//! Wire codecs for Micropub requests.
//!
//! - [`form`] — URL-encoded form bodies (already split into a flat object)
//! - [`json`] — JSON bodies
//! - [`urlencoded`] — raw `application/x-www-form-urlencoded` text → flat object

pub mod form;
pub mod json;
pub mod urlencoded;

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::request::Creation;

/// The top-level object of a body, which must be non-empty.
fn non_empty_object(body: &Value) -> Result<&Map<String, Value>, DecodeError> {
    match body {
        Value::Null => Err(DecodeError::EmptyInput),
        Value::Object(map) if map.is_empty() => Err(DecodeError::EmptyInput),
        Value::Object(map) => Ok(map),
        _ => Err(DecodeError::NotAnObject),
    }
}

fn non_empty_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Reads the `action` discriminator and its companion `url`.
///
/// `Ok(None)` means the body carries no usable `action` at all.
fn action_and_url(map: &Map<String, Value>) -> Result<Option<(&str, &str)>, DecodeError> {
    let Some(action) = non_empty_str(map, "action") else {
        return Ok(None);
    };
    let url = non_empty_str(map, "url").ok_or(DecodeError::MissingUrl)?;
    Ok(Some((action, url)))
}

/// Files one creation field under `commands` or `properties`.
///
/// A key equal to the bare command prefix is dropped.
fn file_field(creation: &mut Creation, key: &str, values: Vec<Value>, options: &DecodeOptions) {
    match options.command_name(key) {
        Some("") => tracing::trace!(key, "dropping empty command name"),
        Some(name) => {
            creation.commands.insert(name.to_string(), values);
        }
        None => {
            creation.properties.insert(key.to_string(), values);
        }
    }
}

fn log_rejection(encoding: &'static str, result: &Result<crate::Request, DecodeError>) {
    if let Err(reason) = result {
        tracing::debug!(encoding, %reason, "rejected micropub request");
    }
}
