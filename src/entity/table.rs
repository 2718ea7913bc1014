use super::type_ref::short_type_name;
use crate::{ColumnDescriptor, ExcelDescriptor, JoinDescriptor, JoinType, NativeType};

/// A Rust type mapped onto a table.
///
/// Implemented by `#[derive(DeriveTable)]`, or by hand with the descriptor builders.
pub trait Table: 'static {
    /// The table and field metadata of this type
    fn descriptor() -> TableDescriptor;

    /// Type name used when the descriptor carries no table name override
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// One declared field of a mapped type, with the descriptors attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    native_type: NativeType,
    column: Option<ColumnDescriptor>,
    join: Option<JoinDescriptor>,
    ignore: bool,
}

impl FieldDescriptor {
    /// A field named `name` of native type `T`
    pub fn new<T: ?Sized>(name: &str) -> Self {
        Self::with_native_type(name, NativeType::of::<T>())
    }

    pub fn with_native_type(name: &str, native_type: NativeType) -> Self {
        Self {
            name: name.to_owned(),
            native_type,
            column: None,
            join: None,
            ignore: false,
        }
    }

    pub fn column(mut self, column: ColumnDescriptor) -> Self {
        self.column = Some(column);
        self
    }

    pub fn join(mut self, join_type: JoinType) -> Self {
        self.join = Some(JoinDescriptor::new(join_type));
        self
    }

    /// Exclude this field from the table
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn native_type(&self) -> &NativeType {
        &self.native_type
    }

    /// The attached column descriptor, if one was declared
    pub fn get_column(&self) -> Option<&ColumnDescriptor> {
        self.column.as_ref()
    }

    pub fn get_join(&self) -> Option<&JoinDescriptor> {
        self.join.as_ref()
    }

    /// Declared join type, [`JoinType::None`] when there is no join descriptor
    pub fn join_type(&self) -> JoinType {
        self.join.map(|j| j.join_type()).unwrap_or_default()
    }

    pub fn is_ignored(&self) -> bool {
        self.ignore
    }
}

/// Table level metadata of a mapped type, together with its fields in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDescriptor {
    table_name: String,
    auto_generated: bool,
    excel: Option<ExcelDescriptor>,
    fields: Vec<FieldDescriptor>,
}

impl TableDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the table name. Empty means the type name is used.
    pub fn table_name(mut self, table_name: &str) -> Self {
        self.table_name = table_name.to_owned();
        self
    }

    /// Whether the table is created from the mapped fields rather than by hand
    pub fn auto_generated(mut self, auto_generated: bool) -> Self {
        self.auto_generated = auto_generated;
        self
    }

    pub fn excel(mut self, excel: ExcelDescriptor) -> Self {
        self.excel = Some(excel);
        self
    }

    /// Append a field. Declaration order is column order.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn get_table_name(&self) -> Option<&str> {
        if self.table_name.is_empty() {
            None
        } else {
            Some(&self.table_name)
        }
    }

    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    pub fn get_excel(&self) -> Option<&ExcelDescriptor> {
        self.excel.as_ref()
    }

    /// The table name override, else `type_name` as is
    pub fn resolved_table_name(&self, type_name: &str) -> String {
        match self.get_table_name() {
            Some(name) => name.to_owned(),
            None => type_name.to_owned(),
        }
    }

    /// Every declared field, ignored ones included
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Mapped columns in declaration order, skipping ignored fields.
    ///
    /// A field declared without a column descriptor yields a value-only one.
    pub fn columns(&self) -> impl Iterator<Item = (&str, ColumnDescriptor)> + '_ {
        self.fields
            .iter()
            .filter(|f| !f.is_ignored())
            .map(|f| (f.name(), f.get_column().cloned().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstraintKind;

    struct InventorySlot;

    impl Table for InventorySlot {
        fn descriptor() -> TableDescriptor {
            TableDescriptor::new()
                .field(FieldDescriptor::new::<i32>("slotId").column(ColumnDescriptor::primary_key()))
                .field(FieldDescriptor::new::<String>("itemName"))
                .field(FieldDescriptor::new::<bool>("dirty").ignore())
                .field(
                    FieldDescriptor::new::<u16>("stackSize")
                        .column(ColumnDescriptor::constraint(ConstraintKind::NotNull)),
                )
        }
    }

    #[test]
    fn table_name_override() {
        let desc = TableDescriptor::new().table_name("orders");
        assert_eq!(desc.resolved_table_name(""), "orders");
        assert_eq!(desc.resolved_table_name("Order"), "orders");

        let desc = TableDescriptor::new();
        assert_eq!(desc.resolved_table_name("OrderLine"), "OrderLine");
        assert_eq!(desc.resolved_table_name(""), "");
    }

    #[test]
    fn default_type_name() {
        assert_eq!(InventorySlot::type_name(), "InventorySlot");
    }

    #[test]
    fn columns_skip_ignored_fields() {
        let desc = InventorySlot::descriptor();
        assert_eq!(desc.fields().len(), 4);

        let names: Vec<_> = desc.columns().map(|(name, _)| name).collect();
        assert_eq!(names, ["slotId", "itemName", "stackSize"]);
    }

    #[test]
    fn columns_are_reiterable() {
        let desc = InventorySlot::descriptor();
        let first: Vec<_> = desc.columns().collect();
        let second: Vec<_> = desc.columns().collect();
        assert_eq!(first, second);
        assert!(first[0].1.has_constraint(ConstraintKind::PrimaryKey));
        assert!(first[1].1.is_value_only());
    }

    #[test]
    fn excel_settings() {
        assert!(InventorySlot::descriptor().get_excel().is_none());

        let desc = TableDescriptor::new().excel(ExcelDescriptor::new("Slots").index(true));
        let excel = desc.get_excel().unwrap();
        assert_eq!(excel.sheet_name(), "Slots");
        assert!(excel.has_index());
    }

    #[test]
    fn join_defaults_to_none() {
        let field = FieldDescriptor::new::<i32>("ownerId");
        assert_eq!(field.join_type(), JoinType::None);
        assert!(field.get_join().is_none());
        assert_eq!(field.join(JoinType::Left).join_type(), JoinType::Left);
    }
}
