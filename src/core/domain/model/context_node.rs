//! Wire model of the VPLEX management response envelope.
//!
//! Every GET returns `{"response": {"context": ..., "message", "exception", "custom-data"}}`.
//! Each context node describes one object of the management tree: its attributes
//! and the names of its children (bodies are fetched separately).

use serde::{Deserialize, Serialize};

/// Top-level document returned by every management call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub response: Option<ResponseBody>,
}

/// The `response` member of the envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResponseBody {
    #[serde(default)]
    pub context: Option<ContextPayload>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub custom_data: Option<String>,
}

/// `context` arrives either as a single node or as a list of nodes depending on
/// the firmware revision.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ContextPayload {
    Many(Vec<ContextNode>),
    One(ContextNode),
}

impl ContextPayload {
    /// Returns the nodes in document order, whatever the wire shape was.
    pub fn nodes(&self) -> &[ContextNode] {
        match self {
            ContextPayload::Many(nodes) => nodes,
            ContextPayload::One(node) => std::slice::from_ref(node),
        }
    }
}

/// One addressable object in the management tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContextNode {
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default)]
    pub children: Option<Vec<ChildRef>>,
}

/// A single named field on a context node.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub value: Option<AttributeValue>,
}

/// Attribute values are either scalar strings or string lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Returns the scalar text, or `None` for list values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::List(_) => None,
        }
    }
}

/// Reference to a child object: only its name and type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChildRef {
    pub name: String,
    #[serde(rename = "type")]
    pub child_type: String,
}
