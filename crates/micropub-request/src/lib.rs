//! micropub-request — normalization of Micropub requests.
//!
//! Decodes form-encoded and JSON request bodies into one canonical
//! [`Request`], converts creation requests to microformats2 objects, and
//! applies update requests to existing objects.
//!
//! # Example
//!
//! ```
//! use micropub_request::{decode_json, decode_form};
//! use serde_json::json;
//!
//! let create = decode_form(&json!({"h": "entry", "content": "Hello World"})).unwrap();
//! assert_eq!(
//!     create.to_microformats(),
//!     Some(json!({"type": ["h-entry"], "properties": {"content": ["Hello World"]}}))
//! );
//!
//! let update = decode_json(&json!({
//!     "action": "update",
//!     "url": "https://example.com/posts/1",
//!     "add": {"category": ["indieweb"]}
//! })).unwrap();
//! let mut post = json!({"type": ["h-entry"], "properties": {"category": ["micropub"]}});
//! update.apply(&mut post).unwrap();
//! assert_eq!(post["properties"]["category"], json!(["micropub", "indieweb"]));
//! ```

pub mod apply;
pub mod cli;
pub mod codec;
pub mod error;
pub mod options;
pub mod request;

pub use codec::form::{decode_form, decode_form_with, try_decode_form, try_decode_form_with};
pub use codec::json::{
    decode_json, decode_json_str, decode_json_with, try_decode_json, try_decode_json_with,
};
pub use codec::urlencoded::decode_urlencoded;
pub use error::{ApplyError, DecodeError};
pub use options::DecodeOptions;
pub use request::{Action, Creation, Deletion, Properties, Request, Update};
