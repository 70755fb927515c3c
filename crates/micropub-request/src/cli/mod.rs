//! Logic behind the command-line tools:
//! - `micropub-decode` — decode a request body to its canonical form
//! - `micropub-apply`  — apply an update request to a document

use std::io::{self, Read, Write};

use serde_json::Value;

use crate::codec::json::try_decode_json;
use crate::codec::{form::try_decode_form, urlencoded};
use crate::error::{ApplyError, DecodeError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Io(io::Error),
    Json(serde_json::Error),
    Decode(DecodeError),
    Apply(ApplyError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(m)  => write!(f, "{m}"),
            CliError::Io(e)     => write!(f, "{e}"),
            CliError::Json(e)   => write!(f, "{e}"),
            CliError::Decode(e) => write!(f, "Invalid request: {e}"),
            CliError::Apply(e)  => write!(f, "Cannot apply: {e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self { CliError::Io(e) }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<DecodeError> for CliError {
    fn from(e: DecodeError) -> Self { CliError::Decode(e) }
}

impl From<ApplyError> for CliError {
    fn from(e: ApplyError) -> Self { CliError::Apply(e) }
}

/// Body encodings accepted by `micropub-decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Json,
    Form,
}

// ── Process plumbing ──────────────────────────────────────────────────────

/// Read the whole of `input`, hand the trimmed text to `command` and write
/// its result to `output` followed by a newline.
pub fn execute<R, W, F>(mut input: R, output: &mut W, command: F) -> Result<(), CliError>
where
    R: Read,
    W: Write,
    F: FnOnce(&str) -> Result<String, CliError>,
{
    let mut buf = String::new();
    input.read_to_string(&mut buf)?;
    let result = command(buf.trim())?;
    output.write_all(result.as_bytes())?;
    output.write_all(b"\n")?;
    Ok(())
}

/// Run `command` over stdin and stdout, then exit the process.
///
/// Exits with status 1 after printing the error to stderr.
pub fn run<F>(command: F) -> !
where
    F: FnOnce(&str) -> Result<String, CliError>,
{
    let result = execute(io::stdin().lock(), &mut io::stdout().lock(), command);
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => fail(e),
    }
}

/// Print `error` to stderr and exit with status 1.
pub fn fail(error: CliError) -> ! {
    eprintln!("{error}");
    std::process::exit(1)
}

// ── micropub-decode ───────────────────────────────────────────────────────

/// Parse the optional `--json` / `--form` flag of `micropub-decode`.
pub fn parse_format(arg: Option<&str>) -> Result<BodyFormat, CliError> {
    match arg {
        None | Some("--json") => Ok(BodyFormat::Json),
        Some("--form") => Ok(BodyFormat::Form),
        Some(other) => Err(CliError::Usage(format!("Unknown option: {other}"))),
    }
}

/// Decode a request body and return the canonical request as pretty JSON.
pub fn decode_body(body: &str, format: BodyFormat) -> Result<String, CliError> {
    let request = match format {
        BodyFormat::Json => {
            let value: Value = serde_json::from_str(body)?;
            try_decode_json(&value)?
        }
        BodyFormat::Form => try_decode_form(&urlencoded::parse(body))?,
    };
    Ok(serde_json::to_string_pretty(&request.to_json())?)
}

// ── micropub-apply ────────────────────────────────────────────────────────

/// Apply a JSON update request to a document.
///
/// Returns the updated document as pretty JSON.
pub fn apply_update(doc_json: &str, request_json: &str) -> Result<String, CliError> {
    let mut doc: Value = serde_json::from_str(doc_json)?;
    let raw: Value = serde_json::from_str(request_json)?;
    let request = try_decode_json(&raw)?;
    request.try_apply(&mut doc)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}
