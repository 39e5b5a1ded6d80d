//! Path pattern matching.

use regex::Regex;

use crate::request::PathParams;
use crate::router::RouterOptions;

/// A compiled path pattern for matching request paths.
///
/// Pattern syntax:
/// - `/users` - literal path
/// - `/users/:id` - path with a named parameter
/// - `/files/*path` - wildcard parameter (matches the remainder of the path)
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// The original pattern string.
    pattern: String,
    /// Compiled regex for matching.
    regex: Regex,
    /// Parameter names in order of appearance.
    param_names: Vec<String>,
}

impl PathPattern {
    /// Parses a path pattern string with default matching options.
    ///
    /// # Example
    ///
    /// ```
    /// use routefs_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/posts/:id/comments/:comment_id");
    /// let params = pattern.match_path("/posts/123/comments/456").unwrap();
    /// assert_eq!(params.get("id"), Some("123"));
    /// assert_eq!(params.get("comment_id"), Some("456"));
    /// ```
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, &RouterOptions::default())
    }

    /// Parses a path pattern string, honoring the router's matching options.
    pub fn with_options(pattern: &str, options: &RouterOptions) -> Self {
        let mut param_names = Vec::new();
        let mut regex_str = String::new();

        if !options.case_sensitive {
            regex_str.push_str("(?i)");
        }
        regex_str.push('^');

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            regex_str.push('/');

            if let Some(name) = part.strip_prefix(':') {
                param_names.push(name.to_string());
                regex_str.push_str("([^/]+)");
            } else if let Some(name) = part.strip_prefix('*') {
                param_names.push(name.to_string());
                regex_str.push_str("(.+)");
            } else {
                regex_str.push_str(&regex::escape(part));
            }
        }

        if regex_str.ends_with('^') {
            // A bare "/" (or empty) pattern matches the root path.
            regex_str.push('/');
        }

        if options.strict_trailing_slash {
            regex_str.push('$');
        } else {
            regex_str.push_str("/?$");
        }

        // Segments are either escaped literals or fixed capture groups, so
        // the assembled expression is always valid.
        let regex = Regex::new(&regex_str).expect("valid path pattern regex");

        Self {
            pattern: pattern.to_string(),
            regex,
            param_names,
        }
    }

    /// Attempts to match a path against this pattern.
    ///
    /// Returns extracted parameters if the path matches.
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let caps = self.regex.captures(path)?;

        let mut params = PathParams::new();

        for (i, name) in self.param_names.iter().enumerate() {
            if let Some(value) = caps.get(i + 1) {
                params.insert(name.clone(), value.as_str().to_string());
            }
        }

        Some(params)
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the parameter names in order of appearance.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path() {
        let pattern = PathPattern::new("/users");
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/users/").is_some());
        assert!(pattern.match_path("/posts").is_none());
    }

    #[test]
    fn test_root_path() {
        let pattern = PathPattern::new("/");
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("/users").is_none());
    }

    #[test]
    fn test_single_param() {
        let pattern = PathPattern::new("/users/:id");
        let params = pattern.match_path("/users/123").unwrap();
        assert_eq!(params.get("id"), Some("123"));
        assert!(pattern.match_path("/users").is_none());
        assert!(pattern.match_path("/users/1/posts").is_none());
    }

    #[test]
    fn test_multiple_params() {
        let pattern = PathPattern::new("/posts/:post_id/comments/:comment_id");
        let params = pattern.match_path("/posts/42/comments/7").unwrap();
        assert_eq!(params.get("post_id"), Some("42"));
        assert_eq!(params.get("comment_id"), Some("7"));
    }

    #[test]
    fn test_wildcard_param() {
        let pattern = PathPattern::new("/files/*path");
        let params = pattern.match_path("/files/docs/readme.md").unwrap();
        assert_eq!(params.get("path"), Some("docs/readme.md"));
    }

    #[test]
    fn test_strict_trailing_slash() {
        let options = RouterOptions {
            strict_trailing_slash: true,
            ..RouterOptions::default()
        };
        let pattern = PathPattern::with_options("/users", &options);
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/users/").is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let options = RouterOptions {
            case_sensitive: false,
            ..RouterOptions::default()
        };
        let pattern = PathPattern::with_options("/Users", &options);
        assert!(pattern.match_path("/users").is_some());
        assert!(pattern.match_path("/USERS").is_some());
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let pattern = PathPattern::new("/users");
        assert!(pattern.match_path("/Users").is_none());
    }
}
