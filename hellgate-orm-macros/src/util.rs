pub(crate) fn trim_starting_raw_identifier<T>(string: T) -> String
where
    T: ToString,
{
    string
        .to_string()
        .trim_start_matches(RAW_IDENTIFIER)
        .to_string()
}

pub(crate) const RAW_IDENTIFIER: &str = "r#";

/// Variant of `ConstraintKind` named by an annotation spelling, matched the
/// same way as its `FromStr`
pub(crate) fn constraint_variant(s: &str) -> Option<&'static str> {
    match normalize(s).as_str() {
        "NOTNULL" => Some("NotNull"),
        "PK" | "PRIMARYKEY" => Some("PrimaryKey"),
        "FK" | "FOREIGNKEY" => Some("ForeignKey"),
        "AI" | "AUTOINCREMENT" => Some("AutoIncrement"),
        "UNIQUE" => Some("Unique"),
        _ => None,
    }
}

/// Variant of `JoinType` named by an annotation spelling
pub(crate) fn join_variant(s: &str) -> Option<&'static str> {
    match normalize(s).as_str() {
        "NONE" => Some("None"),
        "INNER" => Some("Inner"),
        "LEFT" | "LEFTOUTER" => Some("Left"),
        "CROSS" => Some("Cross"),
        _ => None,
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
