//! Route-path derivation.

use std::path::{Component, Path};

/// Reserved filename stem: an `index` file represents its directory's route.
const INDEX_STEM: &str = "index";

/// Derives the canonical route string for a file.
///
/// `route_dir` is the file's directory relative to the scan root (empty for
/// root-level files); `filename` is the file's name within that directory.
///
/// Rules:
/// - The filename's extension (everything from the first `.`) is stripped;
///   a stem starting with `index` collapses to the directory's own route.
/// - Segments are joined with `/` regardless of the platform separator.
/// - A segment starting with `_` becomes a `:` parameter segment
///   (`_id` → `:id`).
///
/// Pure and idempotent: the same inputs always produce the same route.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use routefs::route_path;
///
/// assert_eq!(route_path(Path::new("users"), "index.js"), "/users");
/// assert_eq!(route_path(Path::new("users/_id"), "index.js"), "/users/:id");
/// assert_eq!(route_path(Path::new(""), "health.js"), "/health");
/// ```
pub fn route_path(route_dir: &Path, filename: &str) -> String {
    let stem = filename.split('.').next().unwrap_or(filename);

    let mut route = String::new();

    for component in route_dir.components() {
        if let Component::Normal(part) = component {
            if let Some(part) = part.to_str() {
                push_segment(&mut route, part);
            }
        }
    }

    if !stem.starts_with(INDEX_STEM) {
        push_segment(&mut route, stem);
    }

    if route.is_empty() {
        route.push('/');
    }

    route
}

/// Appends one route segment, translating a `_` prefix into a `:` parameter.
fn push_segment(route: &mut String, segment: &str) {
    route.push('/');
    if let Some(param) = segment.strip_prefix('_') {
        route.push(':');
        route.push_str(param);
    } else {
        route.push_str(segment);
    }
}
