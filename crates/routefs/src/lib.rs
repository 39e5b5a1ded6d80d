//! # routefs
//!
//! Builds a router from a directory tree of handler modules: each file's
//! location becomes a route path and its named exports become per-verb
//! handler registrations.
//!
//! The build is a one-shot, synchronous startup procedure with three
//! injectable boundaries:
//! - [`Filesystem`] — existence, stat, and listing primitives
//!   ([`OsFilesystem`] is the `std::fs` implementation);
//! - [`ModuleResolver`] — maps a file path to its ordered named exports
//!   ([`StaticModules`] is the registry-backed implementation);
//! - [`HostRouter`] — the router registrations land on (implemented for
//!   [`routefs_router::Router`]).
//!
//! ## Conventions
//!
//! | file | route |
//! |---|---|
//! | `routes/index.js` | `/` |
//! | `routes/users/index.js` | `/users` |
//! | `routes/users/profile.js` | `/users/profile` |
//! | `routes/users/_id/index.js` | `/users/:id` |
//!
//! A module exports handlers under verb names (`get`, `post`, `put`,
//! `patch`, `delete`/`del`, `all`) and may declare middleware under the
//! reserved `middlewares` name. Router-wide middleware from the
//! configuration always runs before a file's own middleware.
//!
//! ## Quick Start
//!
//! ```ignore
//! use routefs::{build_router, Export, RouterConfig, StaticModules};
//! use routefs_router::{handler_fn, Request, Response, Router};
//!
//! let modules = StaticModules::new().module(
//!     "routes/users/_id/index.js",
//!     vec![(
//!         "get".to_string(),
//!         Export::Handler(handler_fn(|req: Request| async move {
//!             let id = req.params.get("id").unwrap_or("unknown");
//!             Response::text(format!("User: {id}"))
//!         })),
//!     )],
//! );
//!
//! let router: Router = build_router(RouterConfig::new(), &modules)?;
//! # Ok::<(), routefs::BuildError>(())
//! ```

mod build;
mod config;
mod error;
mod filter;
mod fs;
mod host;
mod middleware;
mod module;
mod resolve;
mod traverse;
mod verb;

pub use build::{build_router, build_router_with};
pub use config::RouterConfig;
pub use error::{BuildError, Result};
pub use filter::{FileEntry, PathFilter, Pattern, RootFilePolicy};
pub use fs::{Filesystem, OsFilesystem};
pub use host::HostRouter;
pub use middleware::{partition_middleware, MiddlewareSpec, MIDDLEWARES_EXPORT};
pub use module::{Export, ModuleResolver, StaticModules};
pub use resolve::route_path;
pub use verb::Verb;
