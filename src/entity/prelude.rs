pub use crate::{
    ColumnDescriptor, ConstraintKind, ConstraintSet, Diagnostic, ExcelDescriptor, FieldDescriptor,
    JoinDescriptor, JoinType, NativeType, SchemaErr, Table, TableDescriptor, TypeMapper, TypeRef, belongs_to,
};

#[cfg(feature = "macros")]
pub use crate::DeriveTable;

#[cfg(feature = "table-registry")]
pub use crate::{TableRegistry, register_table};
