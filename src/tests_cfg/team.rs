use crate as hellgate_orm;
use crate::DeriveTable;

#[derive(Clone, Debug, PartialEq, Eq, DeriveTable)]
#[hellgate(table_name = "team", auto_generated)]
pub struct Team {
    #[hellgate(primary_key, auto_increment)]
    pub id: i32,
    #[hellgate(not_null, unique, column_type = "VARCHAR(16)")]
    pub tag: String,
    pub motto: Option<String>,
}

#[cfg(feature = "table-registry")]
crate::register_table! {
    crate::TableRegistry::new::<Team>(module_path!())
}
