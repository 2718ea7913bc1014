use crate::{ConstraintKind, ConstraintSet, ExcelDescriptor, JoinType, TypeRef};

mod backend;
mod builder;
#[cfg(feature = "with-json")]
mod json;
mod registry;
mod resolver;
mod topology;

pub use backend::*;
pub use builder::*;
pub use registry::*;
pub use resolver::*;

/// The resolved mapping of one type onto a table.
///
/// Produced by the [`SchemaResolver`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct TableSchema {
    type_name: String,
    table_name: String,
    auto_generated: bool,
    #[cfg_attr(feature = "with-json", serde(skip_serializing_if = "Option::is_none"))]
    excel: Option<ExcelDescriptor>,
    columns: Vec<ColumnSchema>,
}

/// A resolved column, in table order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct ColumnSchema {
    field_name: String,
    name: String,
    sql_type: String,
    constraints: ConstraintSet,
    #[cfg_attr(feature = "with-json", serde(skip_serializing_if = "Option::is_none"))]
    foreign_key: Option<ForeignKeySchema>,
    join_type: JoinType,
    #[cfg_attr(feature = "with-json", serde(skip_serializing_if = "Option::is_none"))]
    literal_value: Option<String>,
    nullable: bool,
}

/// The table and column a foreign key column points at
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct ForeignKeySchema {
    target: TypeRef,
    column: String,
}

impl TableSchema {
    /// Short name of the mapped type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    /// Spreadsheet export settings, if the table declared any
    pub fn excel(&self) -> Option<&ExcelDescriptor> {
        self.excel.as_ref()
    }

    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by its resolved name
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a column by the field it was declared on
    pub fn column_for_field(&self, field_name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.field_name == field_name)
    }

    pub fn primary_keys(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns
            .iter()
            .filter(|c| c.has_constraint(ConstraintKind::PrimaryKey))
    }

    /// Columns with a resolved foreign key
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&ColumnSchema, &ForeignKeySchema)> {
        self.columns
            .iter()
            .filter_map(|c| c.foreign_key.as_ref().map(|fk| (c, fk)))
    }
}

impl ColumnSchema {
    /// Declared field name
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Column name, the snake_case form of the field name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    /// Declared constraints, empty for value-only columns
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub fn has_constraint(&self, kind: ConstraintKind) -> bool {
        self.constraints.contains(kind)
    }

    pub fn foreign_key(&self) -> Option<&ForeignKeySchema> {
        self.foreign_key.as_ref()
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn literal_value(&self) -> Option<&str> {
        self.literal_value.as_deref()
    }

    /// An `Option<_>` field that is neither `NOT NULL` nor a primary key
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl ForeignKeySchema {
    pub fn target(&self) -> &TypeRef {
        &self.target
    }

    /// Table name of the target, looked up through its descriptor
    pub fn target_table(&self) -> String {
        self.target.table_name()
    }

    /// Referenced column, in snake_case
    pub fn column(&self) -> &str {
        &self.column
    }
}
