//! Tables for test cases and examples. Not intended for actual use.

pub mod item;
pub mod legacy_score;
pub mod player;
pub mod team;

pub use item::Item;
pub use legacy_score::LegacyScore;
pub use player::Player;
pub use team::Team;

#[cfg(all(test, feature = "table-registry"))]
mod test {
    #[test]
    fn test_table_registry() {
        let tables: Vec<_> = crate::TableRegistry::iter("hellgate_orm::tests_cfg").collect();

        for target in [
            "hellgate_orm::tests_cfg::item",
            "hellgate_orm::tests_cfg::legacy_score",
            "hellgate_orm::tests_cfg::player",
            "hellgate_orm::tests_cfg::team",
        ] {
            if !tables.iter().any(|t| t.module_path == target) {
                panic!("{target} not found");
            }
        }
        assert!(crate::TableRegistry::iter("hellgate-orm::tests_cfg::team").count() == 1);
    }
}
