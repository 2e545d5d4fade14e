use serde_json::{Map, Value};

/// A single table item in its document form: attribute name to JSON value.
pub type Item = Map<String, Value>;

/// Primary key of an item in the single table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableKey {
    pub pk: String,
    pub sk: String,
}

impl TableKey {
    /// Creates a key from a partition key and sort key.
    pub fn new(pk: impl Into<String>, sk: impl Into<String>) -> Self {
        Self {
            pk: pk.into(),
            sk: sk.into(),
        }
    }

    /// Reads the primary key out of an item, if both key attributes are strings.
    pub fn of_item(item: &Item) -> Option<Self> {
        let pk = item.get(crate::schema::PK_ATTR)?.as_str()?;
        let sk = item.get(crate::schema::SK_ATTR)?.as_str()?;
        Some(Self::new(pk, sk))
    }
}

/// An equality condition on a single key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCondition {
    pub attribute: &'static str,
    pub value: String,
}

impl KeyCondition {
    pub fn new(attribute: &'static str, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    /// Returns true if the item carries this attribute with exactly this string value.
    pub fn matches(&self, item: &Item) -> bool {
        item.get(self.attribute).and_then(Value::as_str) == Some(self.value.as_str())
    }
}

/// A key-condition query against the table or one of its secondary indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// Secondary index to query. `None` queries the base table.
    pub index_name: Option<&'static str>,
    pub partition: KeyCondition,
    pub sort: Option<KeyCondition>,
}

impl TableQuery {
    /// Query on a partition key equality.
    pub fn partition(attribute: &'static str, value: impl Into<String>) -> Self {
        Self {
            index_name: None,
            partition: KeyCondition::new(attribute, value),
            sort: None,
        }
    }

    /// Adds a sort key equality to the query.
    pub fn and_sort(mut self, attribute: &'static str, value: impl Into<String>) -> Self {
        self.sort = Some(KeyCondition::new(attribute, value));
        self
    }

    /// Targets a secondary index instead of the base table.
    pub fn on_index(mut self, index_name: &'static str) -> Self {
        self.index_name = Some(index_name);
        self
    }

    /// Returns true if the item satisfies every key condition of the query.
    ///
    /// Items missing the partition attribute never match, which mirrors how a
    /// sparse secondary index only contains items that carry its key attributes.
    pub fn matches(&self, item: &Item) -> bool {
        self.partition.matches(item) && self.sort.as_ref().is_none_or(|s| s.matches(item))
    }
}
