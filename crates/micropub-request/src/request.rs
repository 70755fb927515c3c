//! The canonical Micropub request.
//!
//! Both wire encodings decode into [`Request`]; a request is either a
//! creation (a new microformats2 object) or an action against an existing
//! object identified by URL.

use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// Property name → ordered list of values.
pub type Properties = IndexMap<String, Vec<Value>>;

/// Action verb carrying a structured delta.
pub const UPDATE: &str = "update";
/// Action verb of every creation request.
pub const CREATE: &str = "create";

// ── Request ───────────────────────────────────────────────────────────────

/// A normalized Micropub request, tagged by its action.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Create(Creation),
    Action(Action),
}

/// A request to create a new object.
#[derive(Debug, Clone, PartialEq)]
pub struct Creation {
    /// Microformats type name, always `h-` prefixed.
    pub type_name: String,
    pub properties: Properties,
    /// Protocol commands with the command prefix stripped.
    pub commands: Properties,
}

/// A request to act on an existing object.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub action: String,
    pub url: String,
    /// Present if and only if `action == "update"`.
    pub update: Option<Update>,
}

/// The `{replace, add, delete}` delta of an update request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub replace: Properties,
    pub add: Properties,
    pub delete: Deletion,
}

/// The two shapes an update's `delete` field may take.
#[derive(Debug, Clone, PartialEq)]
pub enum Deletion {
    /// Remove these properties entirely.
    Properties(Vec<String>),
    /// Remove individual values from the named properties.
    Values(Properties),
}

impl Default for Deletion {
    fn default() -> Self {
        Deletion::Values(Properties::new())
    }
}

// ── Construction ──────────────────────────────────────────────────────────

impl Request {
    /// Builds an empty creation request, prefixing `type_name` with `h-`
    /// when it is not already.
    pub fn create(type_name: &str) -> Self {
        Request::Create(Creation::new(type_name))
    }

    /// Builds an action request. An `update` action starts with an empty delta.
    pub fn action(action: impl Into<String>, url: impl Into<String>) -> Self {
        Request::Action(Action::new(action, url))
    }
}

impl Creation {
    pub fn new(type_name: &str) -> Self {
        let type_name = if type_name.starts_with("h-") {
            type_name.to_string()
        } else {
            format!("h-{type_name}")
        };
        Self {
            type_name,
            properties: Properties::new(),
            commands: Properties::new(),
        }
    }
}

impl Action {
    pub fn new(action: impl Into<String>, url: impl Into<String>) -> Self {
        let action = action.into();
        let update = (action == UPDATE).then(Update::default);
        Self {
            action,
            url: url.into(),
            update,
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────

impl Request {
    /// The action verb: `"create"` for creations.
    pub fn action_name(&self) -> &str {
        match self {
            Request::Create(_) => CREATE,
            Request::Action(a) => &a.action,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Request::Create(_) => None,
            Request::Action(a) => Some(&a.url),
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, Request::Create(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Request::Action(Action { update: Some(_), .. }))
    }

    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Request::Create(c) => Some(&c.properties),
            Request::Action(_) => None,
        }
    }

    pub fn commands(&self) -> Option<&Properties> {
        match self {
            Request::Create(c) => Some(&c.commands),
            Request::Action(_) => None,
        }
    }

    pub fn update(&self) -> Option<&Update> {
        match self {
            Request::Create(_) => None,
            Request::Action(a) => a.update.as_ref(),
        }
    }
}

// ── Export ────────────────────────────────────────────────────────────────

impl Request {
    /// Converts a creation request to a microformats2 object.
    ///
    /// Commands are not part of the object. Returns `None` for actions.
    pub fn to_microformats(&self) -> Option<Value> {
        match self {
            Request::Create(c) => Some(json!({
                "type": [c.type_name],
                "properties": properties_to_json(&c.properties),
            })),
            Request::Action(_) => None,
        }
    }

    /// Renders the request in its canonical wire shape.
    pub fn to_json(&self) -> Value {
        match self {
            Request::Create(c) => json!({
                "type": c.type_name,
                "action": CREATE,
                "properties": properties_to_json(&c.properties),
                "commands": properties_to_json(&c.commands),
            }),
            Request::Action(a) => {
                let mut m = Map::new();
                m.insert("action".into(), json!(a.action));
                m.insert("url".into(), json!(a.url));
                if let Some(update) = &a.update {
                    m.insert("update".into(), update.to_json());
                }
                Value::Object(m)
            }
        }
    }
}

impl Update {
    pub fn to_json(&self) -> Value {
        let delete = match &self.delete {
            Deletion::Properties(names) => json!(names),
            Deletion::Values(map) => properties_to_json(map),
        };
        json!({
            "replace": properties_to_json(&self.replace),
            "add": properties_to_json(&self.add),
            "delete": delete,
        })
    }
}

pub(crate) fn properties_to_json(props: &Properties) -> Value {
    Value::Object(
        props
            .iter()
            .map(|(k, v)| (k.clone(), Value::Array(v.clone())))
            .collect(),
    )
}
