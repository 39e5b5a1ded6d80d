//! Build configuration.

use std::path::PathBuf;

use crate::filter::{Pattern, RootFilePolicy};
use crate::host::HostRouter;
use crate::middleware::MiddlewareSpec;

/// Default scan root, relative to the working directory.
pub(crate) const DEFAULT_BASE_DIR: &str = "routes";

/// Configuration for one router build.
///
/// Created once via the builder methods and consumed by
/// [`build_router`](crate::build_router); the build never mutates it.
///
/// # Example
///
/// ```ignore
/// use routefs::{RouterConfig, RootFilePolicy};
/// use routefs_router::Router;
///
/// let config: RouterConfig<Router> = RouterConfig::new()
///     .base_dir("src/routes")
///     .strict_exports(true)
///     .exclude_dirs(vec!["private".into()])
///     .include_root_files(RootFilePolicy::Allowlist(vec!["health".to_string()]));
/// ```
pub struct RouterConfig<R: HostRouter> {
    pub(crate) base_dir: PathBuf,
    pub(crate) strict_exports: bool,
    pub(crate) dirs: Option<Vec<Pattern>>,
    pub(crate) exclude_dirs: Option<Vec<Pattern>>,
    pub(crate) include_root_files: RootFilePolicy,
    pub(crate) middlewares: Option<MiddlewareSpec<R::Handler>>,
    pub(crate) router_options: R::Options,
}

impl<R: HostRouter> Default for RouterConfig<R> {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            strict_exports: false,
            dirs: None,
            exclude_dirs: None,
            include_root_files: RootFilePolicy::All,
            middlewares: None,
            router_options: R::Options::default(),
        }
    }
}

impl<R: HostRouter> RouterConfig<R> {
    /// Creates a configuration with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root of the scanned tree (default: `routes`).
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Rejects unrecognized export names as errors.
    #[must_use]
    pub fn strict_exports(mut self, strict: bool) -> Self {
        self.strict_exports = strict;
        self
    }

    /// Allowlist of directory-name patterns.
    ///
    /// Mutually exclusive with [`exclude_dirs`](Self::exclude_dirs); setting
    /// both fails the build.
    #[must_use]
    pub fn dirs(mut self, patterns: Vec<Pattern>) -> Self {
        self.dirs = Some(patterns);
        self
    }

    /// Denylist of directory-name patterns.
    #[must_use]
    pub fn exclude_dirs(mut self, patterns: Vec<Pattern>) -> Self {
        self.exclude_dirs = Some(patterns);
        self
    }

    /// Sets the root-file inclusion policy (default: include all).
    #[must_use]
    pub fn include_root_files(mut self, policy: RootFilePolicy) -> Self {
        self.include_root_files = policy;
        self
    }

    /// Router-wide middleware, merged ahead of per-file middleware.
    #[must_use]
    pub fn middlewares(mut self, spec: MiddlewareSpec<R::Handler>) -> Self {
        self.middlewares = Some(spec);
        self
    }

    /// Options passed through unmodified to host router construction.
    #[must_use]
    pub fn router_options(mut self, options: R::Options) -> Self {
        self.router_options = options;
        self
    }
}
