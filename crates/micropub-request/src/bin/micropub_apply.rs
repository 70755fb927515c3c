//! `micropub-apply` — apply a Micropub update request to a microformats2 object.
//!
//! Usage:
//!   micropub-apply '<update-request-json>'
//!
//! The document is read from stdin. The update request is the first argument.

use micropub_request::cli::{apply_update, fail, run, CliError};

fn main() {
    let request = std::env::args().nth(1).unwrap_or_else(|| {
        fail(CliError::Usage("First argument must be a JSON update request.".into()))
    });
    run(|doc| apply_update(doc, &request))
}
