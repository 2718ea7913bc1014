use super::topology::TopologicalSort;
use super::{DbBackend, Resolution, SchemaRegistry, SchemaResolver};
use crate::{ConstraintKind, SchemaErr, Table, TypeRef};
use sea_query::{Alias, ColumnDef, ForeignKey, TableCreateStatement};
use std::sync::Arc;
use tracing::{debug, warn};

/// Converts resolved schemas into sea-query DDL statements for a backend
#[derive(Debug, Clone, Copy, Default)]
pub struct Schema {
    backend: DbBackend,
}

impl Schema {
    /// Create a helper for a specific database backend
    pub fn new(backend: DbBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> DbBackend {
        self.backend
    }

    /// Creates a table from a resolution.
    ///
    /// Fails if the resolution reported diagnostics or if more than one
    /// column is a primary key.
    pub fn create_table(&self, resolution: &Resolution) -> Result<TableCreateStatement, SchemaErr> {
        let schema = resolution.schema();
        let table = schema.table_name();
        if !resolution.is_valid() {
            return Err(SchemaErr::InvalidSchema {
                table: table.to_owned(),
                diagnostics: resolution.diagnostics().len(),
            });
        }
        let primary_keys: Vec<String> = schema.primary_keys().map(|c| c.name().to_owned()).collect();
        if primary_keys.len() > 1 {
            return Err(SchemaErr::DuplicatePrimaryKey {
                table: table.to_owned(),
                columns: primary_keys,
            });
        }

        let mut stmt = TableCreateStatement::new();
        stmt.table(Alias::new(table)).if_not_exists();

        for column in schema.columns() {
            let mut column_def = ColumnDef::new(Alias::new(column.name()));
            let auto_increment = column.has_constraint(ConstraintKind::AutoIncrement);
            if auto_increment && self.backend == DbBackend::Postgres {
                match postgres_serial(column.sql_type()) {
                    Some(serial) => column_def.custom(Alias::new(serial)),
                    None => {
                        warn!(
                            "Dropped auto increment on `{}.{}`, `{}` has no serial type",
                            table,
                            column.name(),
                            column.sql_type()
                        );
                        column_def.custom(Alias::new(column.sql_type()))
                    }
                };
            } else {
                column_def.custom(Alias::new(column.sql_type()));
                if auto_increment {
                    column_def.auto_increment();
                }
            }
            if column.has_constraint(ConstraintKind::NotNull) {
                column_def.not_null();
            }
            if column.has_constraint(ConstraintKind::PrimaryKey) {
                column_def.primary_key();
            }
            if column.has_constraint(ConstraintKind::Unique) {
                column_def.unique_key();
            }
            if let Some(value) = column.literal_value() {
                column_def.default(value);
            }
            stmt.col(&mut column_def);
        }

        for (column, foreign_key) in schema.foreign_keys() {
            let target = foreign_key.target_table();
            stmt.foreign_key(
                ForeignKey::create()
                    .name(format!("fk-{}-{}", table, column.name()))
                    .from_tbl(Alias::new(table))
                    .from_col(Alias::new(column.name()))
                    .to_tbl(Alias::new(target))
                    .to_col(Alias::new(foreign_key.column())),
            );
        }

        Ok(stmt)
    }
}

/// Postgres has no auto increment modifier, the serial pseudo types stand in for it
fn postgres_serial(sql_type: &str) -> Option<&'static str> {
    match sql_type.trim().to_ascii_uppercase().as_str() {
        "SMALLINT" | "INT2" => Some("SMALLSERIAL"),
        "INTEGER" | "INT" | "INT4" => Some("SERIAL"),
        "BIGINT" | "INT8" => Some("BIGSERIAL"),
        _ => None,
    }
}

/// Collects tables and produces their `CREATE TABLE` statements in foreign key order.
///
/// Only tables marked as auto generated are created.
#[derive(Debug)]
pub struct SchemaBuilder {
    helper: Schema,
    resolver: SchemaResolver,
    tables: Vec<(TypeRef, Arc<Resolution>)>,
}

impl SchemaBuilder {
    /// Creates a new schema builder
    pub fn new(schema: Schema) -> Self {
        Self {
            helper: schema,
            resolver: SchemaResolver::default(),
            tables: Vec::new(),
        }
    }

    /// Resolver used by [`SchemaBuilder::register`]
    pub fn resolver(mut self, resolver: SchemaResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Register a table to this schema
    pub fn register<T: Table>(mut self) -> Self {
        let resolution = Arc::new(self.resolver.resolve::<T>());
        self.push(TypeRef::of::<T>(), resolution);
        self
    }

    /// Register every table already resolved by a registry
    pub fn register_all(mut self, registry: &SchemaRegistry) -> Self {
        for (type_ref, resolution) in registry.entries() {
            self.push(type_ref, resolution);
        }
        self
    }

    fn push(&mut self, type_ref: TypeRef, resolution: Arc<Resolution>) {
        if self.tables.iter().any(|(t, _)| *t == type_ref) {
            debug!("Table `{}` already registered", type_ref.type_name());
            return;
        }
        self.tables.push((type_ref, resolution));
    }

    /// The `CREATE TABLE` statements, referenced tables first.
    ///
    /// Tables in a reference cycle keep their registration order.
    pub fn build(&self) -> Result<Vec<TableCreateStatement>, SchemaErr> {
        let mut sorter = TopologicalSort::<TypeRef>::new();
        for (type_ref, resolution) in self.tables.iter() {
            if resolution.schema().is_auto_generated() {
                sorter.insert(*type_ref);
            } else {
                debug!("Skipped `{}`, not auto generated", resolution.schema().table_name());
            }
        }
        for (type_ref, resolution) in self.tables.iter() {
            if !resolution.schema().is_auto_generated() {
                continue;
            }
            for (_, foreign_key) in resolution.schema().foreign_keys() {
                let target = *foreign_key.target();
                // self reference is okay, tables outside of the builder are assumed to exist
                if target != *type_ref && self.auto_generated(&target) {
                    sorter.add_dependency(target, *type_ref);
                }
            }
        }

        let mut sorted = Vec::with_capacity(sorter.len());
        while let Some(type_ref) = sorter.pop() {
            sorted.push(type_ref);
        }
        sorted.extend(sorter.drain_remaining());

        sorted
            .iter()
            .filter_map(|type_ref| self.tables.iter().find(|(t, _)| t == type_ref))
            .map(|(_, resolution)| self.helper.create_table(resolution))
            .collect()
    }

    /// Render every statement of [`SchemaBuilder::build`] as SQL
    pub fn build_sql(&self) -> Result<Vec<String>, SchemaErr> {
        let backend = self.helper.backend();
        Ok(self.build()?.iter().map(|stmt| backend.build(stmt)).collect())
    }

    fn auto_generated(&self, type_ref: &TypeRef) -> bool {
        self.tables
            .iter()
            .any(|(t, r)| t == type_ref && r.schema().is_auto_generated())
    }
}
