use crate as hellgate_orm;
use crate::DeriveTable;

#[derive(Clone, Debug, PartialEq, Eq, DeriveTable)]
#[hellgate(table_name = "player", auto_generated)]
pub struct Player {
    #[hellgate(constraints = "PK, AI")]
    pub id: i64,
    #[hellgate(field_name = "nickName", not_null)]
    pub nick_name: String,
    #[hellgate(
        field_name = "teamId",
        not_null,
        belongs_to = "super::team::Team",
        to = "id",
        join = "inner"
    )]
    pub team_id: i32,
    #[hellgate(field_name = "mentorId", belongs_to = "Player", to = "id", join = "left")]
    pub mentor_id: Option<i64>,
    #[hellgate(value = "1")]
    pub level: i32,
    #[hellgate(field_name = "sessionToken", ignore)]
    pub session_token: Option<String>,
}

#[cfg(feature = "table-registry")]
crate::register_table! {
    crate::TableRegistry::new::<Player>(module_path!())
}
