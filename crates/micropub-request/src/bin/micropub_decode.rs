//! `micropub-decode` — print the canonical form of a Micropub request.
//!
//! Usage:
//!   micropub-decode [--form]
//!
//! The request body is read from stdin: JSON by default, urlencoded with `--form`.

use micropub_request::cli::{decode_body, fail, parse_format, run};

fn main() {
    let format = parse_format(std::env::args().nth(1).as_deref()).unwrap_or_else(|e| fail(e));
    run(|body| decode_body(body, format))
}
