//! Table configuration types (Functional Core - pure data).

use shopdb_core::schema::{ORDER_STATUS_ATTR, PK_ATTR, SK_ATTR, STATUS_INDEX, TTL_ATTR};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub gsis: Vec<GsiConfig>,
    /// Attribute holding the expiry time in epoch seconds, if TTL is enabled.
    pub ttl_attribute: Option<String>,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    pub fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Global Secondary Index configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub projection: ProjectionType,
}

/// GSI projection type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    All,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Every attribute used by a table or index key, each listed once.
    pub fn key_attributes(&self) -> Vec<&KeyAttribute> {
        let mut attributes: Vec<&KeyAttribute> = Vec::new();
        let candidates = std::iter::once(&self.partition_key)
            .chain(self.sort_key.as_ref())
            .chain(
                self.gsis
                    .iter()
                    .flat_map(|gsi| std::iter::once(&gsi.partition_key).chain(gsi.sort_key.as_ref())),
            );

        for attribute in candidates {
            if !attributes.iter().any(|a| a.name == attribute.name) {
                attributes.push(attribute);
            }
        }
        attributes
    }
}

/// Returns the canonical table configuration for shopdb.
/// This is a pure function - no I/O.
pub fn shopdb_table_config() -> TableConfig {
    TableConfig {
        table_name: "shopdb".to_string(),
        partition_key: KeyAttribute::string(PK_ATTR),
        sort_key: Some(KeyAttribute::string(SK_ATTR)),
        gsis: vec![GsiConfig {
            name: STATUS_INDEX.to_string(),
            partition_key: KeyAttribute::string(ORDER_STATUS_ATTR),
            sort_key: Some(KeyAttribute::string(PK_ATTR)),
            projection: ProjectionType::All,
        }],
        ttl_attribute: Some(TTL_ATTR.to_string()),
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shopdb_table_config() {
        let config = shopdb_table_config();

        assert_eq!(config.table_name, "shopdb");
        assert_eq!(config.partition_key.name, "pk");
        assert_eq!(config.sort_key.as_ref().map(|k| k.name.as_str()), Some("sk"));
        assert_eq!(config.ttl_attribute.as_deref(), Some("ttl"));

        let gsi = &config.gsis[0];
        assert_eq!(gsi.name, "statusIdx");
        assert_eq!(gsi.partition_key.name, "orderStatus");
        assert_eq!(gsi.sort_key.as_ref().map(|k| k.name.as_str()), Some("pk"));
    }

    #[test]
    fn test_key_attributes_are_unique() {
        let config = shopdb_table_config();
        let names: Vec<_> = config
            .key_attributes()
            .iter()
            .map(|a| a.name.as_str())
            .collect();

        assert_eq!(names, vec!["pk", "sk", "orderStatus"]);
    }

    #[test]
    fn test_with_table_name() {
        let config = shopdb_table_config().with_table_name("shopdb-test");
        assert_eq!(config.table_name, "shopdb-test");
    }
}
