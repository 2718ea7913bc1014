use super::{Resolution, SchemaResolver};
use crate::{Table, TypeRef};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// A thread-safe cache of resolutions, keyed by mapped type.
///
/// Every type is resolved at most once, no matter how many threads ask for it
/// concurrently.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    resolver: SchemaResolver,
    cache: RwLock<Cache>,
}

#[derive(Debug, Default)]
struct Cache {
    order: Vec<TypeRef>,
    resolutions: HashMap<TypeRef, Arc<Resolution>>,
}

impl SchemaRegistry {
    pub fn new(resolver: SchemaResolver) -> Self {
        Self {
            resolver,
            cache: Default::default(),
        }
    }

    /// Collect every table registered with `register_table!` whose module path
    /// starts with `prefix`, and resolve them eagerly
    #[cfg(feature = "table-registry")]
    pub fn from_inventory(resolver: SchemaResolver, prefix: &str) -> Self {
        let registry = Self::new(resolver);
        for entry in crate::TableRegistry::iter(prefix) {
            registry.get_or_resolve_ref(&(entry.type_ref)());
        }
        registry
    }

    pub fn resolver(&self) -> &SchemaResolver {
        &self.resolver
    }

    /// Builder style [`SchemaRegistry::get_or_resolve`]
    pub fn register<T: Table>(self) -> Self {
        self.get_or_resolve::<T>();
        self
    }

    /// The cached resolution of `T`, resolving it on first use
    pub fn get_or_resolve<T: Table>(&self) -> Arc<Resolution> {
        self.get_or_resolve_ref(&TypeRef::of::<T>())
    }

    pub fn get_or_resolve_ref(&self, type_ref: &TypeRef) -> Arc<Resolution> {
        if let Some(resolution) = self.get(type_ref) {
            debug!("Schema cache hit for `{}`", type_ref.type_name());
            return resolution;
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // another thread may have resolved it while we waited for the lock
        if let Some(resolution) = cache.resolutions.get(type_ref) {
            return resolution.clone();
        }
        debug!("Caching schema of `{}`", type_ref.type_name());
        let resolution = Arc::new(
            self.resolver
                .resolve_descriptor(type_ref.type_name(), &type_ref.descriptor()),
        );
        cache.order.push(*type_ref);
        cache.resolutions.insert(*type_ref, resolution.clone());
        resolution
    }

    /// The cached resolution, without resolving
    pub fn get(&self, type_ref: &TypeRef) -> Option<Arc<Resolution>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .resolutions
            .get(type_ref)
            .cloned()
    }

    pub fn contains(&self, type_ref: &TypeRef) -> bool {
        self.get(type_ref).is_some()
    }

    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached resolutions in the order they were first resolved
    pub fn entries(&self) -> Vec<(TypeRef, Arc<Resolution>)> {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .order
            .iter()
            .filter_map(|t| cache.resolutions.get(t).map(|r| (*t, r.clone())))
            .collect()
    }

    pub fn resolutions(&self) -> Vec<Arc<Resolution>> {
        self.entries().into_iter().map(|(_, r)| r).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnDescriptor, FieldDescriptor, TableDescriptor};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DESCRIBED: AtomicUsize = AtomicUsize::new(0);

    struct Counted;

    impl Table for Counted {
        fn descriptor() -> TableDescriptor {
            DESCRIBED.fetch_add(1, Ordering::SeqCst);
            TableDescriptor::new()
                .table_name("counted")
                .field(FieldDescriptor::new::<i32>("id").column(ColumnDescriptor::primary_key()))
        }
    }

    struct Other;

    impl Table for Other {
        fn descriptor() -> TableDescriptor {
            TableDescriptor::new().field(FieldDescriptor::new::<String>("label"))
        }
    }

    struct Late;

    impl Table for Late {
        fn descriptor() -> TableDescriptor {
            TableDescriptor::new().table_name("late")
        }
    }

    #[test]
    fn resolves_once_across_threads() {
        let registry = SchemaRegistry::default();
        let resolutions: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| registry.get_or_resolve::<Counted>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(DESCRIBED.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
        for resolution in resolutions.iter() {
            assert!(Arc::ptr_eq(resolution, &resolutions[0]));
        }
        assert_eq!(resolutions[0].schema().table_name(), "counted");
    }

    #[test]
    fn keeps_first_resolution_order() {
        let registry = SchemaRegistry::default().register::<Other>();
        assert!(!registry.contains(&TypeRef::of::<Late>()));
        registry.get_or_resolve::<Late>();
        registry.get_or_resolve::<Other>();

        let names: Vec<_> = registry
            .resolutions()
            .iter()
            .map(|r| r.schema().table_name().to_owned())
            .collect();
        assert_eq!(names, ["Other", "late"]);
        assert!(!registry.is_empty());
    }
}
