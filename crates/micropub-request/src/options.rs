//! Decoder configuration.

/// Keys removed from every form-encoded creation request before the
/// remaining fields are sorted into properties and commands.
pub const ALWAYS_RESERVED: [&str; 3] = ["h", "access_token", "action"];

/// Names that never become a property of a creation request, whatever the
/// encoding.
pub const NEVER_PROPERTIES: [&str; 2] = ["access_token", "action"];

/// Options for `decode_form_with` / `decode_json_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Prefix marking a field as a protocol command rather than a property.
    pub command_prefix: String,
    /// Additional form keys to strip from creation requests, on top of
    /// [`ALWAYS_RESERVED`].
    pub reserved_keys: Vec<String>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            command_prefix: "mp-".to_string(),
            reserved_keys: Vec::new(),
        }
    }
}

impl DecodeOptions {
    /// Returns true if form field `key` must never reach a decoded
    /// creation request.
    pub fn is_reserved(&self, key: &str) -> bool {
        ALWAYS_RESERVED.contains(&key) || self.reserved_keys.iter().any(|k| k == key)
    }

    /// Strips the command prefix from `key`.
    ///
    /// Returns `None` if `key` is not a command, `Some("")` for a bare prefix.
    pub fn command_name<'a>(&self, key: &'a str) -> Option<&'a str> {
        if self.command_prefix.is_empty() {
            return None;
        }
        key.strip_prefix(self.command_prefix.as_str())
    }
}
