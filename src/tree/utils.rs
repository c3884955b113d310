//! Path helpers for tree walking

use std::io;
use std::path::{Component, Path, PathBuf};

/// Get the display name of a path, falling back to the whole path for roots
/// such as `/`.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Whether the entry name marks a hidden file.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|s| s.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Resolve `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                // `..` above the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

/// Make `path` absolute against the process working directory, then normalize it.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize_path(path))
    } else {
        Ok(normalize_path(&std::env::current_dir()?.join(path)))
    }
}

/// Resolve `path` against `base` the way a shell would: absolute paths win,
/// relative ones are joined, and the result is normalized.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize_path(&base.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("/a/b/c.txt")), "c.txt");
        assert_eq!(entry_name(Path::new("/")), "/");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/a/.git")));
        assert!(!is_hidden(Path::new("/a/src")));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize_path(Path::new("/a/b/")), PathBuf::from("/a/b"));
        assert_eq!(normalize_path(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_against() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve_against(base, Path::new("target")),
            PathBuf::from("/work/project/target")
        );
        assert_eq!(
            resolve_against(base, Path::new("../other")),
            PathBuf::from("/work/other")
        );
        assert_eq!(
            resolve_against(base, Path::new("/tmp/x")),
            PathBuf::from("/tmp/x")
        );
    }

    #[test]
    fn test_absolute_path_keeps_absolute() {
        assert_eq!(
            absolute_path(Path::new("/a/../b")).unwrap(),
            PathBuf::from("/b")
        );
        assert!(absolute_path(Path::new("rel")).unwrap().is_absolute());
    }
}
