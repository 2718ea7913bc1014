use crate::{Table, TableDescriptor};
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Identity of a mapped type, used as a lookup key.
///
/// A `TypeRef` never owns or resolves the referenced type. Its descriptor is
/// only fetched on demand, so a table may point at a type that is declared
/// later in the crate, or at itself.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: TypeId,
    name: &'static str,
    descriptor: fn() -> TableDescriptor,
}

impl TypeRef {
    /// Reference to a mapped type
    pub fn of<T: Table>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: T::type_name(),
            descriptor: T::descriptor,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Short name of the referenced type, without its module path
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Fetch the referenced type's descriptor
    pub fn descriptor(&self) -> TableDescriptor {
        (self.descriptor)()
    }

    /// Table name of the referenced type, honouring its table name override
    pub fn table_name(&self) -> String {
        self.descriptor().resolved_table_name(self.name)
    }
}

impl std::fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeRef({})", self.name)
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

#[cfg(feature = "with-json")]
impl serde::Serialize for TypeRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// Strip module paths from a `std::any::type_name` string, keeping generic arguments readable
pub(crate) fn short_type_name(full: &'static str) -> &'static str {
    let head = match full.find('<') {
        Some(idx) => &full[..idx],
        None => full,
    };
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}
