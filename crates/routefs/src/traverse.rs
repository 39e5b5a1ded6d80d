//! Depth-first traversal of the routes tree.

use std::path::Path;

use crate::error::Result;
use crate::fs::Filesystem;

/// Walks `path` depth-first, invoking `load` for every file encountered.
///
/// A root call on a non-directory treats `path` as a single file and
/// produces exactly one load event. Otherwise each directory is listed once,
/// in filesystem order; subdirectories are descended into in place and
/// processing then continues with the next sibling, so every entry of every
/// directory is visited.
///
/// Traversal knows nothing about filtering; the caller decides which root
/// entries to walk.
pub(crate) fn traverse<F>(
    fs: &dyn Filesystem,
    path: &Path,
    is_root_call: bool,
    load: &mut F,
) -> Result<()>
where
    F: FnMut(&str, &Path) -> Result<()>,
{
    if is_root_call && !fs.is_directory(path) {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        return load(&filename, path);
    }

    for filename in fs.list_directory(path)? {
        let filepath = path.join(&filename);

        if fs.is_directory(&filepath) {
            traverse(fs, &filepath, false, load)?;
        } else {
            load(&filename, &filepath)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    use super::*;

    /// In-memory filesystem with fully controlled listing order.
    struct MemoryFs {
        /// Directory path -> ordered child names. A path is a directory iff
        /// it appears as a key.
        dirs: HashMap<PathBuf, Vec<String>>,
    }

    impl MemoryFs {
        fn new(dirs: &[(&str, &[&str])]) -> Self {
            Self {
                dirs: dirs
                    .iter()
                    .map(|(path, children)| {
                        (
                            PathBuf::from(path),
                            children.iter().map(|c| (*c).to_string()).collect(),
                        )
                    })
                    .collect(),
            }
        }
    }

    impl Filesystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
                || path.parent().is_some_and(|parent| {
                    self.dirs.get(parent).is_some_and(|children| {
                        path.file_name()
                            .and_then(|n| n.to_str())
                            .is_some_and(|name| children.iter().any(|c| c == name))
                    })
                })
        }

        fn is_directory(&self, path: &Path) -> bool {
            self.dirs.contains_key(path)
        }

        fn list_directory(&self, path: &Path) -> io::Result<Vec<String>> {
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
        }
    }

    fn visited(fs: &MemoryFs, root: &str, is_root_call: bool) -> Vec<(String, PathBuf)> {
        let mut seen = Vec::new();
        traverse(fs, Path::new(root), is_root_call, &mut |filename, path| {
            seen.push((filename.to_string(), path.to_path_buf()));
            Ok(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn root_call_on_file_loads_it_once() {
        let fs = MemoryFs::new(&[("/routes", &["health.js"])]);
        let seen = visited(&fs, "/routes/health.js", true);
        assert_eq!(
            seen,
            vec![("health.js".to_string(), PathBuf::from("/routes/health.js"))]
        );
    }

    #[test]
    fn files_load_in_listing_order() {
        let fs = MemoryFs::new(&[("/routes/users", &["a.js", "b.js", "c.js"])]);
        let names: Vec<String> = visited(&fs, "/routes/users", true)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn siblings_after_a_subdirectory_are_still_visited() {
        let fs = MemoryFs::new(&[
            ("/routes/users", &["a.js", "sub", "z.js"]),
            ("/routes/users/sub", &["inner.js"]),
        ]);
        let names: Vec<String> = visited(&fs, "/routes/users", true)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["a.js", "inner.js", "z.js"]);
    }

    #[test]
    fn descends_through_nested_directories() {
        let fs = MemoryFs::new(&[
            ("/routes/api", &["v1"]),
            ("/routes/api/v1", &["users"]),
            ("/routes/api/v1/users", &["index.js"]),
        ]);
        let seen = visited(&fs, "/routes/api", true);
        assert_eq!(
            seen,
            vec![(
                "index.js".to_string(),
                PathBuf::from("/routes/api/v1/users/index.js")
            )]
        );
    }

    #[test]
    fn listing_errors_propagate() {
        let fs = MemoryFs::new(&[("/routes", &["ghost"])]);
        // "ghost" is listed but never registered as a directory, so a
        // root-level traversal of it as a directory fails.
        let result = traverse(&fs, Path::new("/missing"), false, &mut |_, _| Ok(()));
        assert!(result.is_err());
    }

    #[test]
    fn load_errors_abort_traversal() {
        let fs = MemoryFs::new(&[("/routes", &["a.js", "b.js"])]);
        let mut count = 0;
        let result = traverse(&fs, Path::new("/routes"), true, &mut |_, _| {
            count += 1;
            Err(crate::error::BuildError::ConflictingDirFilters)
        });
        assert!(result.is_err());
        assert_eq!(count, 1);
    }
}
