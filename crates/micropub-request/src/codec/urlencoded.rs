//! `application/x-www-form-urlencoded` body parsing.
//!
//! Produces the flat object [`decode_form`](super::form::decode_form)
//! expects. Repeated keys and keys ending in `[]` collect into arrays.

use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};

use super::form::decode_form;
use crate::request::Request;

/// Parse a urlencoded body into an object of strings and string arrays.
///
/// ```
/// use micropub_request::codec::urlencoded::parse;
/// use serde_json::json;
///
/// let body = parse("h=entry&category[]=a&category[]=b&content=hello+world");
/// assert_eq!(body, json!({
///     "h": "entry",
///     "category": ["a", "b"],
///     "content": "hello world"
/// }));
/// ```
pub fn parse(body: &str) -> Value {
    let mut fields = Map::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key);
        let value = Value::String(decode_component(raw_value));
        let (key, as_list) = match key.strip_suffix("[]") {
            Some(stripped) => (stripped.to_string(), true),
            None => (key, false),
        };
        match fields.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None if as_list => {
                fields.insert(key, Value::Array(vec![value]));
            }
            None => {
                fields.insert(key, value);
            }
        }
    }
    Value::Object(fields)
}

/// Parse a urlencoded body and decode it as a form request.
pub fn decode_urlencoded(body: &str) -> Option<Request> {
    decode_form(&parse(body))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
