use crate as hellgate_orm;
use crate::DeriveTable;

/// Created by hand, so never part of generated DDL
#[derive(Clone, Debug, PartialEq, Eq, DeriveTable)]
#[hellgate(table_name = "legacy_score")]
pub struct LegacyScore {
    #[hellgate(primary_key)]
    pub id: i32,
    #[hellgate(
        field_name = "playerId",
        belongs_to = "super::player::Player",
        to = "id"
    )]
    pub player_id: i64,
    pub score: i64,
}

#[cfg(feature = "table-registry")]
crate::register_table! {
    crate::TableRegistry::new::<LegacyScore>(module_path!())
}
