//! Flattens context documents into name → value maps.
//!
//! Nodes are visited in document order and both maps keep that order. When
//! several nodes define the same attribute or child name, the last value wins
//! and the name keeps the position where it first appeared.

use crate::core::domain::{
    error::{VplexError, VplexResult},
    model::context_node::{AttributeValue, ContextNode, ResponseEnvelope},
};
use indexmap::IndexMap;

/// Attributes of one or more context nodes, keyed by attribute name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatAttributes {
    node_type: String,
    values: IndexMap<String, Option<AttributeValue>>,
}

impl FlatAttributes {
    /// The `type` of the last node walked, used to label errors.
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw value; `None` both for absent and for `null` attributes.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Returns the scalar text of an attribute, if present and not a list.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_text)
    }

    /// Returns the scalar text of an attribute, failing with `MalformedResponse`
    /// when it is missing, `null` or a list.
    pub fn require_text(&self, name: &str) -> VplexResult<&str> {
        self.text(name)
            .ok_or_else(|| VplexError::malformed(name, &self.node_type))
    }
}

fn nodes(document: &ResponseEnvelope) -> VplexResult<&[ContextNode]> {
    let body = document
        .response
        .as_ref()
        .ok_or_else(|| VplexError::malformed("response", "envelope"))?;
    let context = body
        .context
        .as_ref()
        .ok_or_else(|| VplexError::malformed("context", "response"))?;
    Ok(context.nodes())
}

/// Collects every node's attributes into one map.
///
/// # Errors
/// `MalformedResponse` when `response`/`context` is missing or a node has no
/// `attributes` array.
pub fn flatten_attributes(document: &ResponseEnvelope) -> VplexResult<FlatAttributes> {
    let mut flat = FlatAttributes::default();
    for node in nodes(document)? {
        let attributes = node
            .attributes
            .as_ref()
            .ok_or_else(|| VplexError::malformed("attributes", &node.node_type))?;
        for attribute in attributes {
            flat.values
                .insert(attribute.name.clone(), attribute.value.clone());
        }
        flat.node_type.clone_from(&node.node_type);
    }
    Ok(flat)
}

/// Collects every node's children into a child name → child type map.
///
/// # Errors
/// `MalformedResponse` when `response`/`context` is missing or a node has no
/// `children` array.
pub fn flatten_children(document: &ResponseEnvelope) -> VplexResult<IndexMap<String, String>> {
    let mut children = IndexMap::new();
    for node in nodes(document)? {
        let refs = node
            .children
            .as_ref()
            .ok_or_else(|| VplexError::malformed("children", &node.node_type))?;
        for child in refs {
            children.insert(child.name.clone(), child.child_type.clone());
        }
    }
    Ok(children)
}

/// Names of the children declared with `child_type`, in document order.
pub fn children_of_type(
    document: &ResponseEnvelope,
    child_type: &str,
) -> VplexResult<Vec<String>> {
    Ok(flatten_children(document)?
        .into_iter()
        .filter(|(_, kind)| kind == child_type)
        .map(|(name, _)| name)
        .collect())
}
