use super::type_ref::short_type_name;

/// The native Rust type of a mapped field, as reported by [`std::any::type_name`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeType(&'static str);

/// Coarse classification of a [`NativeType`] used for storage type inference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeKind {
    Integer,
    Boolean,
    Float,
    Text,
    Bytes,
    Other,
}

impl NativeType {
    pub fn of<T: ?Sized>() -> Self {
        Self(std::any::type_name::<T>())
    }

    /// A native type given by name, for metadata not derived from a Rust type
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    /// Full type path
    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is_optional(&self) -> bool {
        self.0.starts_with("core::option::Option<") || self.0.starts_with("Option<")
    }

    /// The type with any `Option<_>` wrapper removed
    pub fn inner(&self) -> &'static str {
        if self.is_optional() {
            let start = self.0.find('<').map_or(0, |i| i + 1);
            let end = self.0.rfind('>').unwrap_or(self.0.len());
            &self.0[start..end]
        } else {
            self.0
        }
    }

    /// Last path segment of [`NativeType::inner`]
    pub fn base_name(&self) -> &'static str {
        short_type_name(self.inner())
    }

    pub fn kind(&self) -> NativeKind {
        match self.base_name() {
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => NativeKind::Integer,
            "bool" => NativeKind::Boolean,
            "f32" | "f64" => NativeKind::Float,
            "String" | "str" | "&str" | "char" | "Cow<str>" => NativeKind::Text,
            "Vec<u8>" | "[u8]" | "&[u8]" => NativeKind::Bytes,
            _ => NativeKind::Other,
        }
    }
}

/// Maps a native field type onto a storage type when a column declares none
pub trait TypeMapper {
    fn sql_type(&self, native: &NativeType) -> String;
}

impl<F> TypeMapper for F
where
    F: Fn(&NativeType) -> String,
{
    fn sql_type(&self, native: &NativeType) -> String {
        self(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_unwrapping() {
        let ty = NativeType::of::<Option<i64>>();
        assert!(ty.is_optional());
        assert_eq!(ty.inner(), "i64");
        assert_eq!(ty.kind(), NativeKind::Integer);

        let ty = NativeType::of::<String>();
        assert!(!ty.is_optional());
        assert_eq!(ty.base_name(), "String");
        assert_eq!(ty.kind(), NativeKind::Text);
    }

    #[test]
    fn kinds() {
        assert_eq!(NativeType::of::<bool>().kind(), NativeKind::Boolean);
        assert_eq!(NativeType::of::<f32>().kind(), NativeKind::Float);
        assert_eq!(NativeType::of::<Vec<u8>>().kind(), NativeKind::Bytes);
        assert_eq!(NativeType::of::<Option<Vec<u8>>>().kind(), NativeKind::Bytes);
        assert_eq!(NativeType::of::<&str>().kind(), NativeKind::Text);
        assert_eq!(NativeType::of::<Vec<String>>().kind(), NativeKind::Other);
        assert_eq!(NativeType::named("Option<u16>").kind(), NativeKind::Integer);
    }

    #[test]
    fn closures_map_types() {
        let mapper = |ty: &NativeType| ty.base_name().to_uppercase();
        assert_eq!(mapper.sql_type(&NativeType::of::<u8>()), "U8");
    }
}
