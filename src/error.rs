use thiserror::Error;

/// An error raised while registering, resolving or consuming a table mapping
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaErr {
    /// A column descriptor whose foreign key data is inconsistent
    #[error("Malformed descriptor on `{field}`: {reason}")]
    MalformedDescriptor {
        /// Declared field name
        field: String,
        /// What is wrong with the descriptor
        reason: String,
    },
    /// A join type outside of the known set
    #[error("Unknown join type `{0}`")]
    UnknownJoinType(String),
    /// A constraint kind outside of the known set
    #[error("Unknown constraint kind `{0}`")]
    UnknownConstraintKind(String),
    /// More than one column of a table is marked as primary key
    #[error("Table `{table}` declares multiple primary keys: {}", columns.join(", "))]
    DuplicatePrimaryKey {
        /// Resolved table name
        table: String,
        /// Resolved names of every primary key column
        columns: Vec<String>,
    },
    /// Two fields of a table resolve to the same column name
    #[error("Table `{table}` maps more than one field to column `{column}`")]
    DuplicateColumn {
        /// Resolved table name
        table: String,
        /// The shared column name
        column: String,
    },
    /// The schema was resolved with diagnostics and cannot be turned into DDL
    #[error("Table `{table}` has {diagnostics} unresolved diagnostic(s)")]
    InvalidSchema {
        /// Resolved table name
        table: String,
        /// Number of diagnostics reported by the resolver
        diagnostics: usize,
    },
}

impl SchemaErr {
    pub(crate) fn malformed(field: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// A per-field problem found during resolution.
///
/// Resolution keeps going after a diagnostic, so a [`Resolution`](crate::Resolution)
/// can carry several of them next to a partial schema.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "with-json", derive(serde::Serialize))]
pub struct Diagnostic {
    field: String,
    #[cfg_attr(feature = "with-json", serde(serialize_with = "serialize_display"))]
    error: SchemaErr,
}

impl Diagnostic {
    pub(crate) fn new(field: impl Into<String>, error: SchemaErr) -> Self {
        Self {
            field: field.into(),
            error,
        }
    }

    /// Declared name of the offending field
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The error found on this field
    pub fn error(&self) -> &SchemaErr {
        &self.error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

#[cfg(feature = "with-json")]
fn serialize_display<S: serde::Serializer>(err: &SchemaErr, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}
