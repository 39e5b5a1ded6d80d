//! Build orchestration: filter the root, traverse, load, register.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::RouterConfig;
use crate::error::{BuildError, Result};
use crate::filter::{FileEntry, PathFilter};
use crate::fs::{Filesystem, OsFilesystem};
use crate::host::HostRouter;
use crate::middleware::{partition_middleware, MiddlewareSpec, MiddlewareStack};
use crate::module::{Export, ModuleResolver};
use crate::resolve::route_path;
use crate::traverse::traverse;
use crate::verb::Verb;

/// Builds a router by scanning the configured routes directory.
///
/// One-shot, single-threaded startup procedure: any failure aborts the
/// entire build and no partial router is returned.
///
/// # Errors
///
/// See [`BuildError`] for the full taxonomy; filesystem and resolver errors
/// propagate unmodified.
pub fn build_router<R, M>(config: RouterConfig<R>, resolver: &M) -> Result<R>
where
    R: HostRouter,
    R::Handler: Clone,
    M: ModuleResolver<Handler = R::Handler>,
{
    build_router_with(config, resolver, &OsFilesystem)
}

/// [`build_router`] with an explicit filesystem implementation.
pub fn build_router_with<R, M, F>(config: RouterConfig<R>, resolver: &M, fs: &F) -> Result<R>
where
    R: HostRouter,
    R::Handler: Clone,
    M: ModuleResolver<Handler = R::Handler>,
    F: Filesystem,
{
    let RouterConfig {
        base_dir,
        strict_exports,
        dirs,
        exclude_dirs,
        include_root_files,
        middlewares,
        router_options,
    } = config;

    if !fs.exists(&base_dir) {
        return Err(BuildError::RoutesDirNotFound(base_dir));
    }
    if !fs.is_directory(&base_dir) {
        return Err(BuildError::NotADirectory(base_dir));
    }

    let filter = PathFilter::new(dirs, exclude_dirs, include_root_files)?;

    info!(dir = %base_dir.display(), "building router from routes directory");

    let mut router = R::with_options(router_options);
    let entries = root_entries(fs, &base_dir, filter.as_ref())?;

    let mut registrar = Registrar {
        router: &mut router,
        resolver,
        base_dir: &base_dir,
        middlewares: middlewares.as_ref(),
        strict_exports,
        registered: 0,
    };

    for entry in &entries {
        traverse(fs, &entry.full_path, true, &mut |filename, filepath| {
            registrar.load(filename, filepath)
        })?;
    }

    info!(
        dir = %base_dir.display(),
        routes = registrar.registered,
        "router build complete"
    );

    Ok(router)
}

/// Lists the scan root's direct children, retaining filter survivors.
fn root_entries<F: Filesystem>(
    fs: &F,
    base_dir: &Path,
    filter: Option<&PathFilter>,
) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for filename in fs.list_directory(base_dir)? {
        let full_path = base_dir.join(&filename);
        let entry = FileEntry {
            is_directory: fs.is_directory(&full_path),
            filename,
            full_path,
        };

        if filter.is_none_or(|f| f.includes(&entry)) {
            entries.push(entry);
        } else {
            debug!(entry = %entry.filename, "root entry filtered out");
        }
    }

    Ok(entries)
}

/// The per-file load callback, carrying its dependencies explicitly.
struct Registrar<'a, R: HostRouter, M> {
    router: &'a mut R,
    resolver: &'a M,
    base_dir: &'a Path,
    middlewares: Option<&'a MiddlewareSpec<R::Handler>>,
    strict_exports: bool,
    registered: usize,
}

impl<R, M> Registrar<'_, R, M>
where
    R: HostRouter,
    R::Handler: Clone,
    M: ModuleResolver<Handler = R::Handler>,
{
    /// Loads one discovered file and registers its exported verb handlers.
    fn load(&mut self, filename: &str, filepath: &Path) -> Result<()> {
        let exports = self.resolver.load_exports(filepath)?;
        let (exports, file_middlewares) = partition_middleware(exports);
        let stack = MiddlewareStack::new(self.middlewares, file_middlewares);

        let route_dir = filepath
            .parent()
            .and_then(|dir| dir.strip_prefix(self.base_dir).ok())
            .unwrap_or_else(|| Path::new(""));
        let route = route_path(route_dir, filename);

        for (name, export) in exports {
            let Some(verb) = Verb::from_export_name(&name) else {
                if self.strict_exports {
                    return Err(BuildError::ExtraneousExport {
                        path: filepath.to_path_buf(),
                        name,
                    });
                }
                debug!(name = %name, path = %filepath.display(), "skipping unrecognized export");
                continue;
            };

            if !self.router.supports(verb) {
                debug!(%verb, route = %route, "verb not supported by host router");
                continue;
            }

            match export {
                Export::Handler(handler) => {
                    let middleware = stack.chain(verb);
                    debug!(%verb, route = %route, links = middleware.len() + 1, "registering route");
                    self.router.register(verb, &route, middleware, handler);
                    self.registered += 1;
                }
                Export::Middleware(_) => {
                    warn!(
                        %verb,
                        path = %filepath.display(),
                        "verb export holds a middleware declaration, not a handler; skipping"
                    );
                }
            }
        }

        Ok(())
    }
}
