#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # Hellgate ORM
//!
//! Attribute-driven mapping of plain Rust types onto relational tables.
//!
//! A type declares its mapping either with `#[derive(DeriveTable)]` or by
//! implementing [`Table`] by hand with the descriptor builders. The
//! [`SchemaResolver`] turns that metadata into a read-only [`TableSchema`]
//! which downstream consumers (DDL generation, join queries, the JSON codec)
//! work from.
//!
//! ```
//! use hellgate_orm::prelude::*;
//!
//! #[derive(Debug)]
//! struct Player;
//!
//! impl Table for Player {
//!     fn descriptor() -> TableDescriptor {
//!         TableDescriptor::new()
//!             .table_name("players")
//!             .auto_generated(true)
//!             .field(FieldDescriptor::new::<i64>("playerId").column(
//!                 ColumnDescriptor::constraints([ConstraintKind::PrimaryKey, ConstraintKind::AutoIncrement]),
//!             ))
//!             .field(FieldDescriptor::new::<String>("nickName"))
//!     }
//! }
//!
//! let resolution = SchemaResolver::default().resolve::<Player>();
//! assert!(resolution.is_valid());
//!
//! let schema = resolution.schema();
//! assert_eq!(schema.table_name(), "players");
//! assert_eq!(schema.columns()[0].name(), "player_id");
//! assert_eq!(schema.columns()[1].sql_type(), "TEXT");
//! ```

pub mod entity;
pub mod error;
pub mod naming;
pub mod query;
pub mod schema;
#[cfg(feature = "tests-cfg")]
#[doc(hidden)]
pub mod tests_cfg;

pub use entity::*;
pub use error::*;
pub use query::*;
pub use schema::*;

#[cfg(feature = "macros")]
pub use hellgate_orm_macros::DeriveTable;

pub use sea_query;

/// Everything needed to declare and resolve a table mapping.
pub mod prelude {
    pub use crate::entity::prelude::*;
    pub use crate::schema::{
        DbBackend, Resolution, ResolverOptions, Schema, SchemaBuilder, SchemaRegistry,
        SchemaResolver, TableSchema,
    };
}
