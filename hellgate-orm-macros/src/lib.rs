extern crate proc_macro;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derives;
mod util;

/// Implements `hellgate_orm::Table` for a struct with named fields.
///
/// ### Struct attributes
/// - `table_name = "name"`: table name override, the type name is used otherwise
/// - `auto_generated` or `auto_generated = bool`: create the table from the mapped fields
/// - `excel(sheet = "Sheet", file = "book.xlsx", index)`: spreadsheet export settings,
///   `file` and `index` are optional
///
/// ### Field attributes
/// - `primary_key`, `auto_increment`, `not_null`, `unique`, `foreign_key`: add a constraint
/// - `constraints = "PK, AI"`: add a comma separated list of constraints
/// - `column_type = "VARCHAR(32)"`: explicit storage type
/// - `value = "literal"`: fixed value of the column
/// - `belongs_to = "path::Type"`, `to = "column"`: foreign key target, implies `foreign_key`
/// - `join = "inner" | "left" | "left outer" | "cross" | "none"`
/// - `field_name = "name"`: declared field name, the Rust identifier otherwise
/// - `ignore`: keep the field out of the table
///
/// ```
/// use hellgate_orm::DeriveTable;
///
/// #[derive(DeriveTable)]
/// #[hellgate(table_name = "guild", auto_generated)]
/// pub struct Guild {
///     #[hellgate(primary_key, auto_increment)]
///     pub id: i32,
///     #[hellgate(field_name = "guildName", unique, column_type = "VARCHAR(32)")]
///     pub guild_name: String,
/// }
///
/// let resolution = hellgate_orm::SchemaResolver::default().resolve::<Guild>();
/// assert_eq!(resolution.schema().columns()[1].name(), "guild_name");
/// ```
#[proc_macro_derive(DeriveTable, attributes(hellgate))]
pub fn derive_table(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derives::expand_derive_table(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
