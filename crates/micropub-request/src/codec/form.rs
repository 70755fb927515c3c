//! Form-encoded Micropub requests.
//!
//! The input is the flat object a form parser produces: every value is a
//! string or an array of strings. Form encoding can express creations and
//! plain actions, but never an update delta.

use serde_json::Value;

use super::{action_and_url, file_field, log_rejection, non_empty_object};
use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::request::{Action, Creation, Request, UPDATE};

/// Decode a form body, returning `None` if it is not a valid request.
pub fn decode_form(body: &Value) -> Option<Request> {
    try_decode_form(body).ok()
}

pub fn decode_form_with(body: &Value, options: &DecodeOptions) -> Option<Request> {
    try_decode_form_with(body, options).ok()
}

/// Decode a form body, reporting why it was rejected.
pub fn try_decode_form(body: &Value) -> Result<Request, DecodeError> {
    try_decode_form_with(body, &DecodeOptions::default())
}

pub fn try_decode_form_with(body: &Value, options: &DecodeOptions) -> Result<Request, DecodeError> {
    let result = decode(body, options);
    log_rejection("form", &result);
    result
}

fn decode(body: &Value, options: &DecodeOptions) -> Result<Request, DecodeError> {
    let map = non_empty_object(body)?;

    if let Some(Value::String(h)) = map.get("h") {
        let mut creation = Creation::new(h);
        for (key, value) in map {
            if options.is_reserved(key) {
                continue;
            }
            match form_values(value) {
                Some(values) => file_field(&mut creation, key, values, options),
                None => {
                    tracing::trace!(key = key.as_str(), "skipping empty or non-text form field")
                }
            }
        }
        return Ok(Request::Create(creation));
    }

    let (action, url) = action_and_url(map)?.ok_or(DecodeError::MissingDiscriminator)?;
    if action == UPDATE {
        return Err(DecodeError::UpdateNotAllowed);
    }
    Ok(Request::Action(Action::new(action, url)))
}

/// A non-empty string becomes a one-element list; a non-empty list of
/// strings is kept as is. Everything else is skipped.
fn form_values(value: &Value) -> Option<Vec<Value>> {
    match value {
        Value::String(s) if !s.is_empty() => Some(vec![value.clone()]),
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_string) => {
            Some(items.clone())
        }
        _ => None,
    }
}
