use crate::{Table, TypeRef};
use tracing::debug;

#[derive(derive_more::Debug)]
/// An entry submitted to the link-time table registry.
///
/// ```ignore
/// hellgate_orm::register_table! {
///     hellgate_orm::TableRegistry::new::<Player>(module_path!())
/// }
/// ```
pub struct TableRegistry {
    /// Please use `module_path!()`.
    pub module_path: &'static str,
    /// Function returning the registered type's identity.
    #[debug(skip)]
    pub type_ref: fn() -> TypeRef,
}

inventory::collect!(TableRegistry);

/// Macro to register a table
pub use inventory::submit as register_table;

impl TableRegistry {
    pub const fn new<T: Table>(module_path: &'static str) -> Self {
        Self {
            module_path,
            type_ref: TypeRef::of::<T>,
        }
    }

    /// Every registered table whose module path starts with `prefix`.
    ///
    /// A bare crate name matches that crate's modules only, and may be given with dashes.
    pub fn iter(prefix: &str) -> impl Iterator<Item = &'static TableRegistry> {
        let prefix = module_prefix(prefix);
        debug!("Collecting tables with prefix `{prefix}`");
        inventory::iter::<TableRegistry>()
            .into_iter()
            .filter(move |entry| {
                let matched = entry.module_path.starts_with(prefix.as_str())
                    || prefix.strip_suffix("::") == Some(entry.module_path);
                if matched {
                    debug!("Registered {}", entry.module_path);
                } else {
                    debug!("Skipped {}", entry.module_path);
                }
                matched
            })
    }
}

fn module_prefix(prefix: &str) -> String {
    let prefix = prefix.trim_end_matches('*');
    let prefix = if prefix.contains("::") {
        prefix.to_owned()
    } else {
        format!("{prefix}::")
    };
    match prefix.split_once("::") {
        // convert crate name to module path
        Some((left, right)) if left.contains('-') => {
            format!("{}::{right}", left.replace('-', "_"))
        }
        _ => prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_names_become_module_prefixes() {
        assert_eq!(module_prefix("hellgate"), "hellgate::");
        assert_eq!(module_prefix("hellgate-orm"), "hellgate_orm::");
        assert_eq!(module_prefix("hellgate-orm::*"), "hellgate_orm::");
        assert_eq!(module_prefix("hellgate-orm::tests_cfg"), "hellgate_orm::tests_cfg");
        assert_eq!(module_prefix("my-game::tests-cfg"), "my_game::tests-cfg");
    }

    #[cfg(feature = "tests-cfg")]
    #[test]
    fn bare_crate_prefix_matches_whole_crate_only() {
        assert_eq!(TableRegistry::iter("hellgate").count(), 0);
        assert!(TableRegistry::iter("hellgate_orm").count() >= 4);
        assert_eq!(
            TableRegistry::iter("hellgate-orm").count(),
            TableRegistry::iter("hellgate_orm").count()
        );
        assert!(
            TableRegistry::iter("hellgate_orm")
                .all(|entry| entry.module_path.starts_with("hellgate_orm::"))
        );
    }
}
