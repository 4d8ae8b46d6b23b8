//! Path string handling.
//!
//! # Path Convention
//!
//! - Root: `"/"`
//! - Any other directory: absolute with a trailing slash, e.g. `"/home/foo/"`
//! - Display form (prompt, `pwd`): root stays `"/"`, others drop the trailing slash

use crate::config::ROOT_PATH;

/// Resolve `target` against `base` without checking existence.
///
/// - a leading `/` makes `target` absolute
/// - `..` pops one segment (no-op at root)
/// - `.` and empty segments are skipped
/// - anything else is appended as a child
pub fn resolve(base: &str, target: &str) -> String {
    let mut parts: Vec<&str> = if target.starts_with('/') {
        Vec::new()
    } else {
        segments(base).collect()
    };

    for part in segments(target) {
        match part {
            ".." => {
                parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    from_segments(&parts)
}

/// Parent of a directory path. Root is its own parent.
pub fn parent(path: &str) -> String {
    let mut parts: Vec<&str> = segments(path).collect();
    parts.pop();
    from_segments(&parts)
}

/// Path of the child `name` inside `dir`.
pub fn join(dir: &str, name: &str) -> String {
    resolve(dir, name)
}

/// Last segment of a path, empty for root.
pub fn file_name(path: &str) -> &str {
    segments(path).last().unwrap_or("")
}

/// Display form used by the prompt and `pwd`.
pub fn display(path: &str) -> String {
    if path == ROOT_PATH {
        ROOT_PATH.to_string()
    } else {
        path.trim_end_matches('/').to_string()
    }
}

/// True when `path` is `ancestor` itself or lies below it.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    path.starts_with(ancestor)
}

fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn from_segments(parts: &[&str]) -> String {
    if parts.is_empty() {
        ROOT_PATH.to_string()
    } else {
        format!("/{}/", parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve("/", "home"), "/home/");
        assert_eq!(resolve("/home/", "foo"), "/home/foo/");
        assert_eq!(resolve("/home/", "foo/bar"), "/home/foo/bar/");
    }

    #[test]
    fn test_resolve_absolute() {
        assert_eq!(resolve("/home/foo/", "/var"), "/var/");
        assert_eq!(resolve("/home/foo/", "/var/"), "/var/");
        assert_eq!(resolve("/home/", "/"), "/");
    }

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve("/home/foo/", ".."), "/home/");
        assert_eq!(resolve("/home/", ".."), "/");
        // No-op at root
        assert_eq!(resolve("/", ".."), "/");
        assert_eq!(resolve("/a/b/c/", "../../d"), "/a/d/");
    }

    #[test]
    fn test_resolve_current_and_empty() {
        assert_eq!(resolve("/home/", "."), "/home/");
        assert_eq!(resolve("/home/", ""), "/home/");
        assert_eq!(resolve("/home/", "a//b"), "/home/a/b/");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/home/foo/"), "/home/");
        assert_eq!(parent("/home/"), "/");
        assert_eq!(parent("/"), "/");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/home/foo/"), "foo");
        assert_eq!(file_name("/"), "");
    }

    #[test]
    fn test_display() {
        assert_eq!(display("/"), "/");
        assert_eq!(display("/home/"), "/home");
        assert_eq!(display("/home/foo/"), "/home/foo");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/home/foo/", "/home/"));
        assert!(is_within("/home/", "/home/"));
        assert!(!is_within("/homework/", "/home/"));
        assert!(!is_within("/var/", "/home/"));
    }
}
