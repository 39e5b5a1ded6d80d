//! Root-entry filtering.
//!
//! Filtering applies only to the direct children of the scan root; once a
//! root directory is accepted, everything beneath it is traversed.

use std::path::PathBuf;

use regex::Regex;

use crate::error::{BuildError, Result};

/// A directory-name pattern from `dirs` / `exclude_dirs` configuration.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches when the pattern string contains the filename as a substring.
    Literal(String),
    /// Matches when the expression matches the filename.
    Regex(Regex),
}

impl Pattern {
    /// Tests one root-entry filename against this pattern.
    pub fn matches(&self, filename: &str) -> bool {
        match self {
            Self::Literal(check) => check.contains(filename),
            Self::Regex(check) => check.is_match(filename),
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

/// How files sitting directly under the scan root are treated.
#[derive(Debug, Clone, Default)]
pub enum RootFilePolicy {
    /// Include every root-level file, bypassing the directory predicate.
    #[default]
    All,
    /// Subject root-level files to the same predicate as directories.
    DirPredicate,
    /// Include a root-level file iff its name contains a listed substring.
    Allowlist(Vec<String>),
}

/// One entry from a directory listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The entry's name within its directory.
    pub filename: String,
    /// The entry's full path.
    pub full_path: PathBuf,
    /// Whether the entry is a directory.
    pub is_directory: bool,
}

/// The directory allow/deny predicate.
#[derive(Debug, Clone)]
enum DirPredicate {
    /// Include iff any pattern matches.
    Allow(Vec<Pattern>),
    /// Include iff no pattern matches.
    Deny(Vec<Pattern>),
}

impl DirPredicate {
    fn includes(&self, filename: &str) -> bool {
        match self {
            Self::Allow(patterns) => patterns.iter().any(|p| p.matches(filename)),
            Self::Deny(patterns) => !patterns.iter().any(|p| p.matches(filename)),
        }
    }
}

/// Decides which root entries participate in the build.
#[derive(Debug, Clone)]
pub struct PathFilter {
    dirs: DirPredicate,
    root_files: RootFilePolicy,
}

impl PathFilter {
    /// Builds the filter from the configured patterns and root-file policy.
    ///
    /// Returns `None` (accept everything) when neither `dirs` nor
    /// `exclude_dirs` is configured.
    ///
    /// # Errors
    ///
    /// [`BuildError::ConflictingDirFilters`] when both are configured.
    pub fn new(
        dirs: Option<Vec<Pattern>>,
        exclude_dirs: Option<Vec<Pattern>>,
        root_files: RootFilePolicy,
    ) -> Result<Option<Self>> {
        let predicate = match (dirs, exclude_dirs) {
            (None, None) => return Ok(None),
            (Some(_), Some(_)) => return Err(BuildError::ConflictingDirFilters),
            (Some(allow), None) => DirPredicate::Allow(allow),
            (None, Some(deny)) => DirPredicate::Deny(deny),
        };

        Ok(Some(Self {
            dirs: predicate,
            root_files,
        }))
    }

    /// Decides whether a root entry participates in the build.
    ///
    /// Directories always go through the directory predicate; files follow
    /// the configured [`RootFilePolicy`].
    pub fn includes(&self, entry: &FileEntry) -> bool {
        if entry.is_directory {
            return self.dirs.includes(&entry.filename);
        }

        match &self.root_files {
            RootFilePolicy::All => true,
            RootFilePolicy::DirPredicate => self.dirs.includes(&entry.filename),
            RootFilePolicy::Allowlist(names) => {
                names.iter().any(|name| entry.filename.contains(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir(name: &str) -> FileEntry {
        FileEntry {
            filename: name.to_string(),
            full_path: PathBuf::from(name),
            is_directory: true,
        }
    }

    fn file(name: &str) -> FileEntry {
        FileEntry {
            filename: name.to_string(),
            full_path: PathBuf::from(name),
            is_directory: false,
        }
    }

    #[test]
    fn no_patterns_means_accept_everything() {
        let filter = PathFilter::new(None, None, RootFilePolicy::All).unwrap();
        assert!(filter.is_none());
    }

    #[test]
    fn both_pattern_sets_is_a_config_error() {
        let err = PathFilter::new(
            Some(vec!["a".into()]),
            Some(vec!["b".into()]),
            RootFilePolicy::All,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::ConflictingDirFilters));
    }

    #[test]
    fn allowlist_includes_matching_directories() {
        let filter = PathFilter::new(Some(vec!["users".into()]), None, RootFilePolicy::All)
            .unwrap()
            .unwrap();
        assert!(filter.includes(&dir("users")));
        assert!(!filter.includes(&dir("posts")));
    }

    #[test]
    fn denylist_excludes_matching_directories() {
        let filter = PathFilter::new(None, Some(vec!["private".into()]), RootFilePolicy::All)
            .unwrap()
            .unwrap();
        assert!(!filter.includes(&dir("private")));
        assert!(filter.includes(&dir("public")));
    }

    #[test]
    fn literal_pattern_contains_the_filename() {
        // The configured pattern is the containing side: "user-admin"
        // matches the directory "admin" but "admin" does not match a
        // directory named "user-admin".
        let p = Pattern::from("user-admin");
        assert!(p.matches("admin"));
        assert!(!Pattern::from("admin").matches("user-admin"));
    }

    #[test]
    fn regex_pattern_matches_the_filename() {
        let p = Pattern::from(Regex::new("^api-v[0-9]+$").unwrap());
        assert!(p.matches("api-v2"));
        assert!(!p.matches("api"));
    }

    #[test]
    fn root_files_bypass_dir_predicate_by_default() {
        let filter = PathFilter::new(Some(vec!["users".into()]), None, RootFilePolicy::All)
            .unwrap()
            .unwrap();
        assert!(filter.includes(&file("health.js")));
    }

    #[test]
    fn dir_predicate_policy_applies_patterns_to_root_files() {
        let filter = PathFilter::new(
            Some(vec!["users".into()]),
            None,
            RootFilePolicy::DirPredicate,
        )
        .unwrap()
        .unwrap();
        assert!(!filter.includes(&file("health.js")));
        // Pattern-contains-filename applies to files too.
        assert!(filter.includes(&file("users")));
    }

    #[test]
    fn allowlist_policy_selects_root_files_by_substring() {
        let filter = PathFilter::new(
            None,
            Some(vec!["private".into()]),
            RootFilePolicy::Allowlist(vec!["admin".to_string()]),
        )
        .unwrap()
        .unwrap();
        assert!(filter.includes(&file("admin.js")));
        assert!(!filter.includes(&file("public.js")));
    }
}
