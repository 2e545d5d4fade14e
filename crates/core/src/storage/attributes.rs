//! Conversion between JSON document items and DynamoDB attribute values.
//!
//! Shared by the DynamoDB store and the seeding task, so both write items with
//! the same attribute types.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

use super::{Item, Result, StoreError};

/// A DynamoDB attribute map.
pub type AttributeMap = HashMap<String, AttributeValue>;

// ============================================================================
// Values
// ============================================================================

/// Convert a JSON value to an attribute value.
pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(to_attribute_value).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), to_attribute_value(v)))
                .collect(),
        ),
    }
}

/// Convert an attribute value to a JSON value.
///
/// String and number sets read as arrays. Binary attributes are not part of
/// the document model and are rejected.
pub fn from_attribute_value(value: &AttributeValue) -> Result<Value> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(values) => values
            .iter()
            .map(from_attribute_value)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| Ok((k.clone(), from_attribute_value(v)?)))
            .collect::<Result<Map<_, _>>>()
            .map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

fn parse_number(n: &str) -> Result<Number> {
    serde_json::from_str::<Number>(n)
        .map_err(|_| StoreError::InvalidData(format!("Invalid number attribute: {n}")))
}

/// Convert a document item to an attribute map.
pub fn item_to_attributes(item: &Item) -> AttributeMap {
    item.iter()
        .map(|(k, v)| (k.clone(), to_attribute_value(v)))
        .collect()
}

/// Convert an attribute map to a document item.
pub fn attributes_to_item(attributes: &AttributeMap) -> Result<Item> {
    attributes
        .iter()
        .map(|(k, v)| Ok((k.clone(), from_attribute_value(v)?)))
        .collect()
}
