use crate::{ConstraintKind, ConstraintSet, NativeType, TypeMapper, TypeRef, naming};

/// Mapping metadata for one field of a table.
///
/// There is one constructor per descriptor shape:
///
/// | shape             | constructor                                         |
/// |-------------------|-----------------------------------------------------|
/// | value-only        | [`value_only`], [`typed`], [`literal`]              |
/// | single constraint | [`constraint`], [`primary_key`]                     |
/// | constraint set    | [`constraints`]                                     |
/// | foreign key       | [`foreign_key`]                                     |
///
/// A value-only descriptor carries no constraint semantics at all, which is
/// different from a descriptor declaring an empty constraint set. Nothing is
/// validated here: a `ForeignKey` constraint without a target is accepted and
/// reported later by the [`SchemaResolver`](crate::SchemaResolver).
///
/// [`value_only`]: ColumnDescriptor::value_only
/// [`typed`]: ColumnDescriptor::typed
/// [`literal`]: ColumnDescriptor::literal
/// [`constraint`]: ColumnDescriptor::constraint
/// [`primary_key`]: ColumnDescriptor::primary_key
/// [`constraints`]: ColumnDescriptor::constraints
/// [`foreign_key`]: ColumnDescriptor::foreign_key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDescriptor {
    declared_type: String,
    constraints: Option<ConstraintSet>,
    foreign_key_target: Option<TypeRef>,
    foreign_key_column: Option<String>,
    literal_value: Option<String>,
}

impl ColumnDescriptor {
    /// A column without constraints, storage type inferred from the field
    pub fn value_only() -> Self {
        Self::default()
    }

    /// A column without constraints and an explicit storage type
    pub fn typed(declared_type: &str) -> Self {
        Self::value_only().declared_type(declared_type)
    }

    /// A column without constraints holding a fixed value
    pub fn literal(value: &str) -> Self {
        Self::value_only().with_literal(value)
    }

    pub fn constraint(kind: ConstraintKind) -> Self {
        Self::constraints([kind])
    }

    /// Shorthand for `constraint(ConstraintKind::PrimaryKey)`
    pub fn primary_key() -> Self {
        Self::constraint(ConstraintKind::PrimaryKey)
    }

    /// A column declaring a set of constraints, possibly empty
    pub fn constraints<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = ConstraintKind>,
    {
        Self {
            constraints: Some(kinds.into_iter().collect()),
            ..Default::default()
        }
    }

    /// A `FOREIGN KEY` column referencing `column` of the `target` table
    pub fn foreign_key(target: TypeRef, column: &str) -> Self {
        Self::constraint(ConstraintKind::ForeignKey).references(target, column)
    }

    /// Override the storage type. An empty string restores inference.
    pub fn declared_type(mut self, declared_type: &str) -> Self {
        self.declared_type = declared_type.to_owned();
        self
    }

    /// Add a constraint. A value-only descriptor becomes a constrained one.
    pub fn and(mut self, kind: ConstraintKind) -> Self {
        self.constraints.get_or_insert_with(ConstraintSet::new).insert(kind);
        self
    }

    /// Point this column at `column` of the `target` table.
    ///
    /// Does not add the `ForeignKey` constraint.
    pub fn references(mut self, target: TypeRef, column: &str) -> Self {
        self.foreign_key_target = Some(target);
        self.foreign_key_column = Some(column.to_owned());
        self
    }

    pub fn with_literal(mut self, value: &str) -> Self {
        self.literal_value = Some(value.to_owned());
        self
    }

    pub fn has_constraint(&self, kind: ConstraintKind) -> bool {
        match &self.constraints {
            Some(set) => set.contains(kind),
            None => false,
        }
    }

    /// Returns true for descriptors built without constraint semantics
    pub fn is_value_only(&self) -> bool {
        self.constraints.is_none()
    }

    pub fn get_constraints(&self) -> Option<&ConstraintSet> {
        self.constraints.as_ref()
    }

    /// The declared storage type, `None` when it is to be inferred
    pub fn get_declared_type(&self) -> Option<&str> {
        if self.declared_type.is_empty() {
            None
        } else {
            Some(&self.declared_type)
        }
    }

    pub fn foreign_key_target(&self) -> Option<&TypeRef> {
        self.foreign_key_target.as_ref()
    }

    /// Referenced column name as declared, before any name transform
    pub fn foreign_key_column(&self) -> Option<&str> {
        self.foreign_key_column.as_deref()
    }

    pub fn literal_value(&self) -> Option<&str> {
        self.literal_value.as_deref()
    }

    /// Column name for a field, see [`naming::camel_to_snake`]
    pub fn resolved_name(field_name: &str) -> String {
        naming::camel_to_snake(field_name)
    }

    /// The declared storage type, or the one `mapper` infers from `native`
    pub fn resolved_type<M>(&self, native: &NativeType, mapper: &M) -> String
    where
        M: TypeMapper + ?Sized,
    {
        match self.get_declared_type() {
            Some(declared) => declared.to_owned(),
            None => mapper.sql_type(native),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Table, TableDescriptor};
    use strum::IntoEnumIterator;

    struct Item;

    impl Table for Item {
        fn descriptor() -> TableDescriptor {
            TableDescriptor::new()
        }
    }

    fn text_mapper(_: &NativeType) -> String {
        "TEXT".to_owned()
    }

    #[test]
    fn value_only_has_no_constraints() {
        let descriptors = [
            ColumnDescriptor::value_only(),
            ColumnDescriptor::typed("VARCHAR(32)"),
            ColumnDescriptor::literal("gold"),
        ];
        for col in descriptors {
            assert!(col.is_value_only());
            for kind in ConstraintKind::iter() {
                assert!(!col.has_constraint(kind));
            }
        }
    }

    #[test]
    fn empty_constraint_set_is_not_value_only() {
        let col = ColumnDescriptor::constraints(Vec::<ConstraintKind>::new());
        assert!(!col.is_value_only());
        assert!(col.get_constraints().unwrap().is_empty());
        assert!(!col.has_constraint(ConstraintKind::NotNull));
    }

    #[test]
    fn constraint_sets() {
        let col = ColumnDescriptor::constraints([ConstraintKind::PrimaryKey, ConstraintKind::AutoIncrement]);
        assert!(col.has_constraint(ConstraintKind::PrimaryKey));
        assert!(col.has_constraint(ConstraintKind::AutoIncrement));
        assert!(!col.has_constraint(ConstraintKind::Unique));

        let col = ColumnDescriptor::value_only().and(ConstraintKind::Unique);
        assert!(!col.is_value_only());
        assert!(col.has_constraint(ConstraintKind::Unique));
    }

    #[test]
    fn foreign_key_keeps_target() {
        let col = ColumnDescriptor::foreign_key(TypeRef::of::<Item>(), "itemId");
        assert!(col.has_constraint(ConstraintKind::ForeignKey));
        assert_eq!(col.foreign_key_target(), Some(&TypeRef::of::<Item>()));
        assert_eq!(col.foreign_key_column(), Some("itemId"));
    }

    #[test]
    fn foreign_key_without_target_is_accepted() {
        let col = ColumnDescriptor::constraint(ConstraintKind::ForeignKey);
        assert!(col.has_constraint(ConstraintKind::ForeignKey));
        assert!(col.foreign_key_target().is_none());
        assert!(col.foreign_key_column().is_none());
    }

    #[test]
    fn resolved_type_prefers_declaration() {
        let native = NativeType::of::<i32>();
        assert_eq!(
            ColumnDescriptor::typed("BIGINT").resolved_type(&native, &text_mapper),
            "BIGINT"
        );
        assert_eq!(
            ColumnDescriptor::value_only().resolved_type(&native, &text_mapper),
            "TEXT"
        );
        assert_eq!(
            ColumnDescriptor::typed("BIGINT")
                .declared_type("")
                .resolved_type(&native, &text_mapper),
            "TEXT"
        );
    }

    #[test]
    fn resolved_name() {
        assert_eq!(ColumnDescriptor::resolved_name("userId"), "user_id");
        assert_eq!(ColumnDescriptor::resolved_name("ID"), "i_d");
    }
}
