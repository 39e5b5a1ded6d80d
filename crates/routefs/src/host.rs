//! The host router boundary.

use routefs_router::{Method, Router, RouterOptions};

use crate::verb::Verb;

/// A router the build can register routes into.
///
/// The build never depends on how matching or dispatch is implemented; it
/// only constructs the router from its opaque options and calls
/// [`register`](Self::register) once per exported verb handler.
pub trait HostRouter {
    /// The handler type the router registers.
    type Handler;
    /// Construction options, passed through the build unmodified.
    type Options: Default;

    /// Constructs an empty router from its options.
    fn with_options(options: Self::Options) -> Self;

    /// Whether this router can register the given verb.
    ///
    /// Unsupported verbs are skipped without error.
    fn supports(&self, verb: Verb) -> bool {
        let _ = verb;
        true
    }

    /// Registers one route: the ordered middleware chain runs before the
    /// handler.
    fn register(
        &mut self,
        verb: Verb,
        route: &str,
        middleware: Vec<Self::Handler>,
        handler: Self::Handler,
    );
}

impl HostRouter for Router {
    type Handler = routefs_router::Handler;
    type Options = RouterOptions;

    fn with_options(options: RouterOptions) -> Self {
        Self::with_options(options)
    }

    fn register(
        &mut self,
        verb: Verb,
        route: &str,
        mut middleware: Vec<Self::Handler>,
        handler: Self::Handler,
    ) {
        middleware.push(handler);
        match verb {
            Verb::Get => self.route(Method::Get, route, middleware),
            Verb::Post => self.route(Method::Post, route, middleware),
            Verb::Put => self.route(Method::Put, route, middleware),
            Verb::Patch => self.route(Method::Patch, route, middleware),
            Verb::Delete => self.route(Method::Delete, route, middleware),
            Verb::All => self.route_all(route, middleware),
        }
    }
}
