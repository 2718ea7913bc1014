use super::TableSchema;
use serde_json::{Map, Value};

impl TableSchema {
    /// The schema as a JSON value
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rename the keys of a JSON object from field names to column names.
    ///
    /// Keys that are not a mapped field are kept as they are.
    pub fn to_column_keys(&self, record: Map<String, Value>) -> Map<String, Value> {
        record
            .into_iter()
            .map(|(key, value)| match self.column_for_field(&key) {
                Some(column) => (column.name().to_owned(), value),
                None => (key, value),
            })
            .collect()
    }

    /// Rename the keys of a JSON object from column names back to field names
    pub fn to_field_keys(&self, row: Map<String, Value>) -> Map<String, Value> {
        row.into_iter()
            .map(|(key, value)| match self.column(&key) {
                Some(column) => (column.field_name().to_owned(), value),
                None => (key, value),
            })
            .collect()
    }
}
