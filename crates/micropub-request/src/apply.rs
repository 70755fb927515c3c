//! Applying update requests to microformats2 objects.
//!
//! The delta is applied in a fixed order: replace, then add, then delete.
//! A value added and deleted in the same request therefore ends up deleted,
//! while a property replaced and then deleted by name ends up absent.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ApplyError;
use crate::request::{Deletion, Properties, Request, Update};

impl Request {
    /// Apply this update request to `target` in place.
    ///
    /// Returns the modified target, or `None` if this is not an update
    /// request or `target` is not a microformats2 object. A rejected target
    /// is left untouched.
    pub fn apply<'a>(&self, target: &'a mut Value) -> Option<&'a mut Value> {
        self.try_apply(target).ok()
    }

    pub fn try_apply<'a>(&self, target: &'a mut Value) -> Result<&'a mut Value, ApplyError> {
        let update = self.update().ok_or(ApplyError::NotAnUpdate).inspect_err(|reason| {
            tracing::debug!(%reason, action = self.action_name(), "refusing to apply request");
        })?;
        {
            let properties = target_properties(target).inspect_err(|reason| {
                tracing::debug!(%reason, "refusing to apply update");
            })?;
            update.merge_into(properties);
        }
        Ok(target)
    }
}

impl Update {
    /// Merge the delta into a `properties` object.
    pub fn merge_into(&self, properties: &mut Map<String, Value>) {
        replace(properties, &self.replace);
        add(properties, &self.add);
        match &self.delete {
            Deletion::Properties(names) => delete_properties(properties, names),
            Deletion::Values(values) => delete_values(properties, values),
        }
    }
}

// ── Target validation ─────────────────────────────────────────────────────

fn target_properties(target: &mut Value) -> Result<&mut Map<String, Value>, ApplyError> {
    let map = match target {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ApplyError::InvalidTarget("not a non-empty object")),
    };
    if !map.get("type").is_some_and(Value::is_array) {
        return Err(ApplyError::InvalidTarget("type is not an array"));
    }
    match map.get_mut("properties") {
        Some(Value::Object(properties)) => Ok(properties),
        _ => Err(ApplyError::InvalidTarget("properties is not an object")),
    }
}

// ── Delta steps ───────────────────────────────────────────────────────────

fn replace(properties: &mut Map<String, Value>, delta: &Properties) {
    for (name, values) in delta {
        properties.insert(name.clone(), Value::Array(values.clone()));
    }
}

/// Set union of the existing values and the added ones; the first
/// occurrence of each value is kept.
///
/// Values are keyed on their serialized text, so the union is linear in
/// the number of values.
fn add(properties: &mut Map<String, Value>, delta: &Properties) {
    for (name, values) in delta {
        let slot = properties
            .entry(name.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        let existing = match slot.take() {
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        let mut merged: IndexMap<String, Value> =
            IndexMap::with_capacity(existing.len() + values.len());
        for value in existing.into_iter().chain(values.iter().cloned()) {
            merged.entry(value.to_string()).or_insert(value);
        }
        *slot = Value::Array(merged.into_values().collect());
    }
}

fn delete_properties(properties: &mut Map<String, Value>, names: &[String]) {
    for name in names {
        properties.shift_remove(name);
    }
}

/// Removes the first occurrence of each listed value.
fn delete_values(properties: &mut Map<String, Value>, delta: &Properties) {
    for (name, values) in delta {
        let Some(Value::Array(existing)) = properties.get_mut(name) else {
            continue;
        };
        for value in values {
            if let Some(idx) = existing.iter().position(|v| v == value) {
                existing.remove(idx);
            }
        }
    }
}
