use super::{ColumnSchema, DbBackend, ForeignKeySchema, TableSchema};
use crate::{
    ColumnDescriptor, ConstraintKind, Diagnostic, FieldDescriptor, SchemaErr, Table,
    TableDescriptor, TypeMapper, naming,
};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Options of a [`SchemaResolver`]
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    pub(crate) backend: DbBackend,
    pub(crate) reject_duplicate_primary_keys: bool,
    pub(crate) log_diagnostics: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            backend: DbBackend::Sqlite,
            reject_duplicate_primary_keys: false,
            log_diagnostics: true,
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend whose type mapping infers undeclared column types
    pub fn backend(&mut self, backend: DbBackend) -> &mut Self {
        self.backend = backend;
        self
    }

    /// Report every primary key after the first one as a diagnostic.
    ///
    /// Off by default, in which case duplicates only fail when DDL is generated.
    pub fn reject_duplicate_primary_keys(&mut self, value: bool) -> &mut Self {
        self.reject_duplicate_primary_keys = value;
        self
    }

    /// Log every diagnostic at `WARN` level
    pub fn log_diagnostics(&mut self, value: bool) -> &mut Self {
        self.log_diagnostics = value;
        self
    }

    pub fn get_backend(&self) -> DbBackend {
        self.backend
    }

    pub fn get_reject_duplicate_primary_keys(&self) -> bool {
        self.reject_duplicate_primary_keys
    }

    pub fn get_log_diagnostics(&self) -> bool {
        self.log_diagnostics
    }
}

/// Outcome of resolving one type: a schema, possibly partial, and the per-field diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct Resolution {
    schema: TableSchema,
    diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// No diagnostics were reported
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_parts(self) -> (TableSchema, Vec<Diagnostic>) {
        (self.schema, self.diagnostics)
    }

    /// The schema if it is valid, else the diagnostics
    pub fn into_result(self) -> Result<TableSchema, Vec<Diagnostic>> {
        if self.diagnostics.is_empty() {
            Ok(self.schema)
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Turns table descriptors into [`TableSchema`]s.
///
/// Stateless: resolving the same descriptor twice gives equal results, and any
/// number of threads may share one resolver.
#[derive(Debug, Clone, Default)]
pub struct SchemaResolver {
    options: ResolverOptions,
}

impl SchemaResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve a mapped type
    pub fn resolve<T: Table>(&self) -> Resolution {
        self.resolve_descriptor(T::type_name(), &T::descriptor())
    }

    /// Resolve a descriptor, inferring column types with the configured backend
    pub fn resolve_descriptor(&self, type_name: &str, descriptor: &TableDescriptor) -> Resolution {
        self.resolve_with(type_name, descriptor, &self.options.backend)
    }

    /// Resolve a descriptor with a custom type mapper
    #[cfg_attr(
        feature = "tracing-spans",
        tracing::instrument(level = "debug", skip(self, descriptor, mapper))
    )]
    pub fn resolve_with<M>(
        &self,
        type_name: &str,
        descriptor: &TableDescriptor,
        mapper: &M,
    ) -> Resolution
    where
        M: TypeMapper + ?Sized,
    {
        let table_name = descriptor.resolved_table_name(type_name);
        debug!("Resolving `{type_name}` as table `{table_name}`");

        let mut columns = Vec::new();
        let mut diagnostics = Vec::new();
        let mut primary_keys: Vec<String> = Vec::new();
        let mut names = HashSet::new();

        for field in descriptor.fields() {
            if field.is_ignored() {
                debug!("Skipped ignored field `{}`", field.name());
                continue;
            }
            let column = self.resolve_field(field, mapper, &mut diagnostics);
            // the first field keeps the column
            if !names.insert(column.name.clone()) {
                diagnostics.push(Diagnostic::new(
                    field.name(),
                    SchemaErr::DuplicateColumn {
                        table: table_name.clone(),
                        column: column.name,
                    },
                ));
                continue;
            }

            if column.has_constraint(ConstraintKind::PrimaryKey) {
                primary_keys.push(column.name.clone());
                if self.options.reject_duplicate_primary_keys && primary_keys.len() > 1 {
                    diagnostics.push(Diagnostic::new(
                        field.name(),
                        SchemaErr::DuplicatePrimaryKey {
                            table: table_name.clone(),
                            columns: primary_keys.clone(),
                        },
                    ));
                }
            }
            columns.push(column);
        }

        if self.options.log_diagnostics {
            for diagnostic in diagnostics.iter() {
                warn!("Table `{table_name}`: {diagnostic}");
            }
        }
        debug!(
            "Resolved table `{table_name}` with {} column(s) and {} diagnostic(s)",
            columns.len(),
            diagnostics.len()
        );

        Resolution {
            schema: TableSchema {
                type_name: type_name.to_owned(),
                table_name,
                auto_generated: descriptor.is_auto_generated(),
                excel: descriptor.get_excel().cloned(),
                columns,
            },
            diagnostics,
        }
    }

    fn resolve_field<M>(
        &self,
        field: &FieldDescriptor,
        mapper: &M,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ColumnSchema
    where
        M: TypeMapper + ?Sized,
    {
        let descriptor = field.get_column().cloned().unwrap_or_default();
        let constraints = descriptor.get_constraints().cloned().unwrap_or_default();
        let foreign_key = match resolve_foreign_key(field.name(), &descriptor) {
            Ok(foreign_key) => foreign_key,
            Err(err) => {
                diagnostics.push(Diagnostic::new(field.name(), err));
                None
            }
        };
        let nullable = field.native_type().is_optional()
            && !constraints.contains(ConstraintKind::NotNull)
            && !constraints.contains(ConstraintKind::PrimaryKey);

        ColumnSchema {
            field_name: field.name().to_owned(),
            name: naming::camel_to_snake(field.name()),
            sql_type: descriptor.resolved_type(field.native_type(), mapper),
            constraints,
            foreign_key,
            join_type: field.join_type(),
            literal_value: descriptor.literal_value().map(ToOwned::to_owned),
            nullable,
        }
    }
}

fn resolve_foreign_key(
    field: &str,
    descriptor: &ColumnDescriptor,
) -> Result<Option<ForeignKeySchema>, SchemaErr> {
    let declared = descriptor.has_constraint(ConstraintKind::ForeignKey);
    let column = descriptor
        .foreign_key_column()
        .filter(|column| !column.is_empty());

    match (declared, descriptor.foreign_key_target(), column) {
        (true, Some(target), Some(column)) => Ok(Some(ForeignKeySchema {
            target: *target,
            column: naming::camel_to_snake(column),
        })),
        (true, None, _) => Err(SchemaErr::malformed(
            field,
            "FOREIGN KEY constraint without a target table",
        )),
        (true, Some(target), None) => Err(SchemaErr::malformed(
            field,
            format!(
                "FOREIGN KEY to `{}` without a target column",
                target.type_name()
            ),
        )),
        (false, Some(target), _) => Err(SchemaErr::malformed(
            field,
            format!(
                "references `{}` without a FOREIGN KEY constraint",
                target.type_name()
            ),
        )),
        (false, None, _) => Ok(None),
    }
}
