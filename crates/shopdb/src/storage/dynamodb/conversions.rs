//! DynamoDB request building: primary keys and expressions.
//!
//! Expression builders use `#name` / `:value` placeholders so attribute names
//! never clash with DynamoDB reserved words.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use shopdb_core::schema::{PK_ATTR, SK_ATTR};
use shopdb_core::storage::attributes::{to_attribute_value, AttributeMap};
use shopdb_core::storage::{Item, TableKey, TableQuery};

/// The primary key attributes of `key`.
pub fn key_to_attributes(key: &TableKey) -> AttributeMap {
    HashMap::from([
        (PK_ATTR.to_string(), AttributeValue::S(key.pk.clone())),
        (SK_ATTR.to_string(), AttributeValue::S(key.sk.clone())),
    ])
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression with its placeholder bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: AttributeMap,
}

/// Build `SET #a0 = :v0, #a1 = :v1, ...` for the non-key attributes.
///
/// Returns `None` when there is nothing to set. Attributes are numbered in
/// name order so the expression is deterministic.
pub fn build_update_expression(attributes: &Item) -> Option<Expression> {
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    let mut assignments = Vec::new();

    let mut sorted: Vec<_> = attributes
        .iter()
        .filter(|(name, _)| name.as_str() != PK_ATTR && name.as_str() != SK_ATTR)
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    for (i, (name, value)) in sorted.into_iter().enumerate() {
        let name_placeholder = format!("#a{i}");
        let value_placeholder = format!(":v{i}");
        assignments.push(format!("{name_placeholder} = {value_placeholder}"));
        names.insert(name_placeholder, name.clone());
        values.insert(value_placeholder, to_attribute_value(value));
    }

    if assignments.is_empty() {
        return None;
    }

    Some(Expression {
        expression: format!("SET {}", assignments.join(", ")),
        names,
        values,
    })
}

/// Build the key condition expression of a query.
pub fn build_key_condition(query: &TableQuery) -> Expression {
    let mut expression = "#pk = :pk".to_string();
    let mut names = HashMap::from([("#pk".to_string(), query.partition.attribute.to_string())]);
    let mut values = HashMap::from([(
        ":pk".to_string(),
        AttributeValue::S(query.partition.value.clone()),
    )]);

    if let Some(sort) = &query.sort {
        expression.push_str(" AND #sk = :sk");
        names.insert("#sk".to_string(), sort.attribute.to_string());
        values.insert(":sk".to_string(), AttributeValue::S(sort.value.clone()));
    }

    Expression {
        expression,
        names,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use shopdb_core::schema::{all_users_query, orders_by_status_query, STATUS_INDEX};

    fn item(value: Value) -> Item {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_key_to_attributes() {
        let attributes = key_to_attributes(&TableKey::new("USER#", "PROFILE#alice"));
        assert_eq!(attributes.len(), 2);
        assert_eq!(
            attributes.get("sk"),
            Some(&AttributeValue::S("PROFILE#alice".to_string()))
        );
    }

    #[test]
    fn test_update_expression() {
        let attributes = item(json!({"fullName": "Alice", "email": "a@x.com"}));

        let update = build_update_expression(&attributes).unwrap();

        assert_eq!(update.expression, "SET #a0 = :v0, #a1 = :v1");
        assert_eq!(update.names.get("#a0").map(String::as_str), Some("email"));
        assert_eq!(update.names.get("#a1").map(String::as_str), Some("fullName"));
        assert_eq!(
            update.values.get(":v1"),
            Some(&AttributeValue::S("Alice".to_string()))
        );
    }

    #[test]
    fn test_update_expression_skips_keys() {
        let attributes = item(json!({"pk": "X", "sk": "Y", "items": []}));

        let update = build_update_expression(&attributes).unwrap();

        assert_eq!(update.expression, "SET #a0 = :v0");
        assert_eq!(update.names.get("#a0").map(String::as_str), Some("items"));
    }

    #[test]
    fn test_update_expression_empty() {
        assert_eq!(build_update_expression(&item(json!({"pk": "X"}))), None);
    }

    #[test]
    fn test_key_condition_partition_only() {
        let condition = build_key_condition(&all_users_query());

        assert_eq!(condition.expression, "#pk = :pk");
        assert_eq!(condition.names.get("#pk").map(String::as_str), Some("pk"));
        assert_eq!(
            condition.values.get(":pk"),
            Some(&AttributeValue::S("USER#".to_string()))
        );
    }

    #[test]
    fn test_key_condition_status_index() {
        let query = orders_by_status_query("bob", "pending");
        let condition = build_key_condition(&query);

        assert_eq!(query.index_name, Some(STATUS_INDEX));
        assert_eq!(condition.expression, "#pk = :pk AND #sk = :sk");
        assert_eq!(
            condition.names.get("#pk").map(String::as_str),
            Some("orderStatus")
        );
        assert_eq!(condition.names.get("#sk").map(String::as_str), Some("pk"));
        assert_eq!(
            condition.values.get(":sk"),
            Some(&AttributeValue::S("ORDER#bob".to_string()))
        );
    }
}
