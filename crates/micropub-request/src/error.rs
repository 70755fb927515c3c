//! Error types for decoding and applying Micropub requests.
//!
//! Every variant collapses to the same "no result" outcome in the
//! `Option`-returning API; the `try_*` functions surface the cause.

use thiserror::Error;

// ── Decode ────────────────────────────────────────────────────────────────

/// Why a raw form or JSON body was rejected as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("EMPTY_INPUT")]
    EmptyInput,
    #[error("NOT_AN_OBJECT")]
    NotAnObject,
    #[error("MISSING_DISCRIMINATOR")]
    MissingDiscriminator,
    #[error("INVALID_TYPE")]
    InvalidType,
    #[error("MISSING_URL")]
    MissingUrl,
    #[error("MISSING_PROPERTIES")]
    MissingProperties,
    #[error("UPDATE_NOT_ALLOWED")]
    UpdateNotAllowed,
}

// ── Apply ─────────────────────────────────────────────────────────────────

/// Why an update could not be merged into a target document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("NOT_AN_UPDATE")]
    NotAnUpdate,
    #[error("INVALID_TARGET: {0}")]
    InvalidTarget(&'static str),
}
