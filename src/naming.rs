//! Field to column naming rule, shared by the schema resolver and the JSON codec.

/// Converts a camelCase field name into its snake_case column name.
///
/// Every uppercase character except the first one gets an underscore in
/// front of it and the result is lowercased. Runs of capitals are therefore
/// split letter by letter: `ID` becomes `i_d`. Existing DDL depends on this
/// exact output.
///
/// ```
/// use hellgate_orm::naming::camel_to_snake;
///
/// assert_eq!(camel_to_snake("userId"), "user_id");
/// assert_eq!(camel_to_snake("ID"), "i_d");
/// assert_eq!(camel_to_snake("user_id"), "user_id");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::camel_to_snake;

    #[test]
    fn camel_case() {
        assert_eq!(camel_to_snake("userId"), "user_id");
        assert_eq!(camel_to_snake("createdAtTime"), "created_at_time");
        assert_eq!(camel_to_snake("ItemName"), "item_name");
    }

    #[test]
    fn uppercase_runs() {
        assert_eq!(camel_to_snake("ID"), "i_d");
        assert_eq!(camel_to_snake("userID"), "user_i_d");
        assert_eq!(camel_to_snake("HTTPCode"), "h_t_t_p_code");
    }

    #[test]
    fn already_snake_case() {
        assert_eq!(camel_to_snake("user_id"), "user_id");
        assert_eq!(camel_to_snake(&camel_to_snake("userId")), "user_id");
    }

    #[test]
    fn short_inputs() {
        assert_eq!(camel_to_snake("a"), "a");
        assert_eq!(camel_to_snake("A"), "a");
        assert_eq!(camel_to_snake(""), "");
    }
}
