/// XML to JSON tree conversion, following xmltodict conventions:
/// element name → object key, attributes → `@`-prefixed keys, text content →
/// `#text` (or a plain string leaf), repeated siblings → array in document
/// order. All leaves are strings; no numeric coercion.
use serde_json::map::Entry;
use serde_json::{Map, Value};

use crate::api::ApiError;

/// Prefix for attribute keys.
const ATTR_PREFIX: char = '@';
/// Key for text content of an element that also has attributes or children.
const TEXT_KEY: &str = "#text";

/// Convert an XML document into the equivalent JSON tree.
///
/// The result is a single-key object: the root element's name mapped to its
/// converted content.
///
/// # Errors
///
/// Returns `ApiError::Xml` when `text` is not well-formed XML.
pub fn to_value(text: &str) -> Result<Value, ApiError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    let mut map = Map::new();
    map.insert(root.tag_name().name().to_owned(), element_value(root));
    Ok(Value::Object(map))
}

fn element_value(node: roxmltree::Node) -> Value {
    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(
            format!("{ATTR_PREFIX}{}", attr.name()),
            Value::String(attr.value().to_owned()),
        );
    }

    for child in node.children().filter(roxmltree::Node::is_element) {
        let value = element_value(child);
        match map.entry(child.tag_name().name().to_owned()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            // Repeated sibling: promote the existing entry to an array.
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(items) => items.push(value),
                existing => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
            },
        }
    }

    let text: String = node
        .children()
        .filter(roxmltree::Node::is_text)
        .filter_map(|n| n.text())
        .collect();
    let text = text.trim();

    if map.is_empty() {
        if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_owned())
        }
    } else {
        if !text.is_empty() {
            map.insert(TEXT_KEY.to_owned(), Value::String(text.to_owned()));
        }
        Value::Object(map)
    }
}
