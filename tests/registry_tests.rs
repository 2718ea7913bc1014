pub mod common;

use hellgate_orm::prelude::*;
use hellgate_orm::tests_cfg::{Item, LegacyScore, Player, Team};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn concurrent_first_access_shares_one_resolution() {
    common::init_logging();

    let registry = SchemaRegistry::default();
    let resolutions: Vec<Arc<Resolution>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..16)
            .map(|i| {
                let registry = &registry;
                s.spawn(move || {
                    if i % 2 == 0 {
                        registry.get_or_resolve::<Player>()
                    } else {
                        registry.get_or_resolve_ref(&TypeRef::of::<Player>())
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(registry.len(), 1);
    for resolution in resolutions.iter() {
        assert!(Arc::ptr_eq(resolution, &resolutions[0]));
    }
    assert!(Arc::ptr_eq(
        &registry.get(&TypeRef::of::<Player>()).unwrap(),
        &resolutions[0]
    ));
}

#[test]
fn lookups_do_not_resolve() {
    let registry = SchemaRegistry::default();
    assert!(registry.get(&TypeRef::of::<Team>()).is_none());
    assert!(registry.is_empty());

    let registry = registry.register::<Team>().register::<Team>();
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(&TypeRef::of::<Team>()));
}

#[test]
fn registry_uses_its_resolver() {
    let resolver = SchemaResolver::new(ResolverOptions::new().backend(DbBackend::MySql).to_owned());
    let registry = SchemaRegistry::new(resolver).register::<Team>();
    let team = registry.get_or_resolve::<Team>();
    assert_eq!(team.schema().column("id").unwrap().sql_type(), "INT");
    assert_eq!(registry.resolver().options().get_backend(), DbBackend::MySql);
}

#[test]
fn collect_from_inventory() {
    common::init_logging();

    let registry = SchemaRegistry::from_inventory(SchemaResolver::default(), "hellgate-orm::tests_cfg");
    assert_eq!(registry.len(), 4);
    for type_ref in [
        TypeRef::of::<Item>(),
        TypeRef::of::<LegacyScore>(),
        TypeRef::of::<Player>(),
        TypeRef::of::<Team>(),
    ] {
        assert!(registry.contains(&type_ref), "{type_ref:?} not registered");
    }

    let none = SchemaRegistry::from_inventory(SchemaResolver::default(), "some_other_crate");
    assert!(none.is_empty());
}

#[test]
fn bare_crate_prefix_is_a_whole_segment() {
    let partial = SchemaRegistry::from_inventory(SchemaResolver::default(), "hellgate");
    assert!(partial.is_empty());

    let whole = SchemaRegistry::from_inventory(SchemaResolver::default(), "hellgate-orm");
    assert_eq!(whole.len(), 4);
    assert!(whole.contains(&TypeRef::of::<Team>()));
}
