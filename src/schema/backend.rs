use crate::{NativeKind, NativeType, TypeMapper};
use sea_query::{
    MysqlQueryBuilder, PostgresQueryBuilder, SelectStatement, SqliteQueryBuilder,
    TableCreateStatement,
};

/// The SQL dialect schemas are generated for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DbBackend {
    /// A MySQL backend
    MySql,
    /// A PostgreSQL backend
    Postgres,
    /// A SQLite backend
    #[default]
    Sqlite,
}

impl DbBackend {
    /// Render a statement as SQL text for this backend
    pub fn build<S>(&self, statement: &S) -> String
    where
        S: StatementBuilder,
    {
        statement.build(self)
    }
}

/// Statements that [`DbBackend::build`] can render
pub trait StatementBuilder {
    fn build(&self, db_backend: &DbBackend) -> String;
}

macro_rules! build_any_stmt {
    ($stmt: ty) => {
        impl StatementBuilder for $stmt {
            fn build(&self, db_backend: &DbBackend) -> String {
                match db_backend {
                    DbBackend::MySql => self.to_string(MysqlQueryBuilder),
                    DbBackend::Postgres => self.to_string(PostgresQueryBuilder),
                    DbBackend::Sqlite => self.to_string(SqliteQueryBuilder),
                }
            }
        }
    };
}

build_any_stmt!(TableCreateStatement);
build_any_stmt!(SelectStatement);

fn is_wide_integer(native: &NativeType) -> bool {
    matches!(
        native.base_name(),
        "i64" | "u64" | "i128" | "u128" | "isize" | "usize" | "u32"
    )
}

impl TypeMapper for DbBackend {
    fn sql_type(&self, native: &NativeType) -> String {
        let kind = native.kind();
        let ty = match self {
            Self::Sqlite => match kind {
                NativeKind::Integer | NativeKind::Boolean => "INTEGER",
                NativeKind::Float => "REAL",
                NativeKind::Bytes => "BLOB",
                NativeKind::Text | NativeKind::Other => "TEXT",
            },
            Self::Postgres => match kind {
                NativeKind::Integer if is_wide_integer(native) => "BIGINT",
                NativeKind::Integer => "INTEGER",
                NativeKind::Boolean => "BOOLEAN",
                NativeKind::Float if native.base_name() == "f32" => "REAL",
                NativeKind::Float => "DOUBLE PRECISION",
                NativeKind::Bytes => "BYTEA",
                NativeKind::Text | NativeKind::Other => "TEXT",
            },
            Self::MySql => match kind {
                NativeKind::Integer if is_wide_integer(native) => "BIGINT",
                NativeKind::Integer => "INT",
                NativeKind::Boolean => "BOOL",
                NativeKind::Float if native.base_name() == "f32" => "FLOAT",
                NativeKind::Float => "DOUBLE",
                NativeKind::Bytes => "BLOB",
                NativeKind::Text | NativeKind::Other => "TEXT",
            },
        };
        ty.to_owned()
    }
}
