use super::Player;
use crate::{
    ColumnDescriptor, ConstraintKind, FieldDescriptor, JoinType, Table, TableDescriptor, TypeRef,
};

/// Declared with the descriptor builders instead of the derive macro
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: i32,
    pub owner_id: Option<i64>,
    pub name: String,
    pub weight: f32,
}

impl Table for Item {
    fn descriptor() -> TableDescriptor {
        TableDescriptor::new()
            .table_name("item")
            .auto_generated(true)
            .field(FieldDescriptor::new::<i32>("id").column(ColumnDescriptor::primary_key()))
            .field(
                FieldDescriptor::new::<Option<i64>>("ownerId")
                    .column(ColumnDescriptor::foreign_key(TypeRef::of::<Player>(), "id"))
                    .join(JoinType::Left),
            )
            .field(
                FieldDescriptor::new::<String>("name")
                    .column(ColumnDescriptor::constraint(ConstraintKind::NotNull)),
            )
            .field(FieldDescriptor::new::<f32>("weight"))
    }
}

#[cfg(feature = "table-registry")]
crate::register_table! {
    crate::TableRegistry::new::<Item>(module_path!())
}
