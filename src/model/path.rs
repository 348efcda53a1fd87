//! Dot/bracket paths locating a value inside a JSON document.
//!
//! The root is the empty string. Object members append `.key` (without the
//! leading dot at the root), array positions append `[i]`.

/// Path of an object member under `parent`.
#[must_use]
pub fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        let mut path = String::with_capacity(parent.len() + key.len() + 1);
        path.push_str(parent);
        path.push('.');
        path.push_str(key);
        path
    }
}

/// Path of an array element under `parent`.
#[must_use]
pub fn join_index(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

/// Label used for a path in human-readable output.
#[must_use]
pub fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_members_have_no_leading_dot() {
        assert_eq!(join_key("", "status"), "status");
        assert_eq!(join_key("user", "id"), "user.id");
    }

    #[test]
    fn test_nested_paths() {
        let items = join_key("", "items");
        let first = join_index(&items, 0);
        assert_eq!(join_key(&first, "name"), "items[0].name");
        assert_eq!(join_index("", 2), "[2]");
        assert_eq!(join_index(&join_index("", 0), 1), "[0][1]");
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path(""), "(root)");
        assert_eq!(display_path("a.b"), "a.b");
    }
}
