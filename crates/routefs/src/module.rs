//! The module resolver boundary.
//!
//! The build never loads code itself; it asks an injected resolver for the
//! named values a file exports. The only assumption is that the same path
//! yields the same export order across calls within one build.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::middleware::MiddlewareSpec;

/// One named value exported by a handler module.
#[derive(Clone, Debug)]
pub enum Export<H> {
    /// A request handler, registered under a verb-named export.
    Handler(H),
    /// A middleware declaration, exported under the reserved name.
    Middleware(MiddlewareSpec<H>),
}

/// Loads a file path into its ordered list of named exports.
pub trait ModuleResolver {
    /// The handler type the resolver yields.
    type Handler;

    /// Returns the module's exports in declaration order.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole build.
    fn load_exports(&self, path: &Path) -> Result<Vec<(String, Export<Self::Handler>)>>;
}

/// A registry-backed resolver.
///
/// Rust has no runtime module loading, so callers register each route file's
/// exports up front, keyed by the path the traversal will discover.
#[derive(Default)]
pub struct StaticModules<H> {
    modules: HashMap<PathBuf, Vec<(String, Export<H>)>>,
}

impl<H> StaticModules<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registers a module's exports, keyed by file path.
    #[must_use]
    pub fn module(
        mut self,
        path: impl Into<PathBuf>,
        exports: Vec<(String, Export<H>)>,
    ) -> Self {
        self.modules.insert(path.into(), exports);
        self
    }
}

impl<H: Clone> ModuleResolver for StaticModules<H> {
    type Handler = H;

    fn load_exports(&self, path: &Path) -> Result<Vec<(String, Export<H>)>> {
        self.modules
            .get(path)
            .cloned()
            .ok_or_else(|| BuildError::Module {
                path: path.to_path_buf(),
                message: "no module registered for this path".to_string(),
            })
    }
}
