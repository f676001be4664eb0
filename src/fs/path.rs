//! POSIX-style virtual path utilities
//!
//! Pure string operations on slash-separated paths. Nothing here
//! touches the real filesystem; virtual sources use these to fake a
//! directory hierarchy around the single exposed file.

/// Path separator for virtual sources
pub const SEPARATOR: char = '/';

/// Lexically simplify `path`: collapse `.` and `//`, resolve `..`
/// against preceding components, keep the rooted/relative distinction.
/// The empty path cleans to `.`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with(SEPARATOR);
    let mut out: Vec<&str> = Vec::new();

    for comp in path.split(SEPARATOR) {
        match comp {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|c| *c != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
                // rooted paths cannot climb above the root
            }
            c => out.push(c),
        }
    }

    let mut cleaned = String::new();
    if rooted {
        cleaned.push(SEPARATOR);
    }
    cleaned.push_str(&out.join("/"));
    if cleaned.is_empty() {
        ".".to_string()
    } else {
        cleaned
    }
}

/// Join the non-empty elements with the separator and clean the result.
/// Joining nothing yields the empty string.
pub fn join(elems: &[&str]) -> String {
    let parts: Vec<&str> = elems.iter().copied().filter(|e| !e.is_empty()).collect();
    if parts.is_empty() {
        return String::new();
    }
    clean(&parts.join("/"))
}

/// Last element of `path` after dropping trailing slashes.
/// The empty path yields `.`; an all-slash path yields `/`.
pub fn base(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.is_empty() {
        return SEPARATOR.to_string();
    }
    match trimmed.rfind(SEPARATOR) {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Everything but the last element of `path`, cleaned.
/// A path without a separator yields `.`.
pub fn dir(path: &str) -> String {
    match path.rfind(SEPARATOR) {
        Some(i) => clean(&path[..i + 1]),
        None => ".".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean() {
        assert_eq!(clean(""), ".");
        assert_eq!(clean("."), ".");
        assert_eq!(clean("/"), "/");
        assert_eq!(clean("/.."), "/");
        assert_eq!(clean("/a/b/"), "/a/b");
        assert_eq!(clean("a//b"), "a/b");
        assert_eq!(clean("a/./b"), "a/b");
        assert_eq!(clean("a/b/.."), "a");
        assert_eq!(clean("a/b/../.."), ".");
        assert_eq!(clean("../a"), "../a");
        assert_eq!(clean("/../a"), "/a");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&[]), "");
        assert_eq!(join(&["", ""]), "");
        assert_eq!(join(&["a", "b"]), "a/b");
        assert_eq!(join(&["a", ""]), "a");
        assert_eq!(join(&["/", "a", "b/"]), "/a/b");
        assert_eq!(join(&["a/", "../b"]), "b");
    }

    #[test]
    fn test_base() {
        assert_eq!(base(""), ".");
        assert_eq!(base("/"), "/");
        assert_eq!(base("///"), "/");
        assert_eq!(base("/a/b"), "b");
        assert_eq!(base("/a/b/"), "b");
        assert_eq!(base("file"), "file");
    }

    #[test]
    fn test_dir() {
        assert_eq!(dir("file"), ".");
        assert_eq!(dir("/"), "/");
        assert_eq!(dir("/a"), "/");
        assert_eq!(dir("/a/b"), "/a");
        assert_eq!(dir("/a/b/"), "/a/b");
        assert_eq!(dir("a/b"), "a");
    }
}
