use crate::{JoinType, TableSchema};
use sea_query::{Alias, Expr, Query, SelectStatement};
use std::collections::HashSet;
use tracing::debug;

/// Select every column of a table, joined with the tables its foreign key
/// columns point at.
///
/// A column produces a join when it declares a join type other than
/// [`JoinType::None`](crate::JoinType::None) and resolved to a foreign key. The
/// joined table is aliased as `{target}_{column}` when it is the table itself
/// or was already joined.
///
/// Cross joins are skipped: every sea-query join carries an `ON` clause, and
/// PostgreSQL rejects `CROSS JOIN .. ON`.
pub fn select_with_joins(schema: &TableSchema) -> SelectStatement {
    let table = schema.table_name();
    let mut stmt = Query::select();
    stmt.from(Alias::new(table));
    for column in schema.columns() {
        stmt.column((Alias::new(table), Alias::new(column.name())));
    }

    let mut joined = HashSet::from([table.to_owned()]);
    for column in schema.columns() {
        if column.join_type() == JoinType::Cross {
            debug!(
                "Skipped CROSS join on `{}.{}`, no join condition",
                table,
                column.name()
            );
            continue;
        }
        let Some(join_type) = column.join_type().as_sea_query() else {
            continue;
        };
        let Some(foreign_key) = column.foreign_key() else {
            debug!(
                "Skipped {} join on `{}.{}`, no foreign key",
                column.join_type(),
                table,
                column.name()
            );
            continue;
        };

        let target = foreign_key.target_table();
        let on = |target_ref: &str| {
            Expr::col((Alias::new(table), Alias::new(column.name())))
                .equals((Alias::new(target_ref), Alias::new(foreign_key.column())))
        };
        if joined.insert(target.clone()) {
            stmt.join(join_type, Alias::new(&target), on(&target));
        } else {
            let alias = format!("{}_{}", target, column.name());
            stmt.join_as(join_type, Alias::new(&target), Alias::new(&alias), on(&alias));
        }
    }
    stmt
}
