//! Main router implementation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{Result, RouterError};
use crate::path::PathPattern;
use crate::request::{Method, PathParams, Request};
use crate::response::Response;

/// A boxed future for async handler operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result of one chain link processing a request.
pub enum MiddlewareResult {
    /// Continue to the next link in the chain.
    Continue(Request),
    /// Stop processing and return this response.
    Response(Response),
}

/// One link in a route's handler chain.
///
/// Middleware and terminal handlers share this shape; a terminal handler is
/// simply a link that always produces a [`Response`].
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, MiddlewareResult> + Send + Sync>;

/// Wraps an async function returning a [`Response`] into a chain link.
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| {
        let fut = f(req);
        Box::pin(async move { MiddlewareResult::Response(fut.await) })
    })
}

/// Wraps an async function returning a [`MiddlewareResult`] into a chain link.
pub fn middleware_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = MiddlewareResult> + Send + 'static,
{
    Arc::new(move |req| Box::pin(f(req)))
}

/// Matching options applied to every registered route.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Match path literals case-sensitively.
    pub case_sensitive: bool,
    /// Distinguish `/users` from `/users/`.
    pub strict_trailing_slash: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            strict_trailing_slash: false,
        }
    }
}

/// A single route definition.
#[derive(Clone)]
struct Route {
    /// HTTP method; `None` matches any method.
    method: Option<Method>,
    /// Path pattern.
    pattern: PathPattern,
    /// Ordered handler chain.
    chain: Vec<Handler>,
}

/// The main router for handling HTTP requests.
#[derive(Default)]
pub struct Router {
    /// Registered routes, in registration order.
    routes: Vec<Route>,
    /// Matching options.
    options: RouterOptions,
}

impl Router {
    /// Creates a new empty router with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty router with the given matching options.
    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            routes: Vec::new(),
            options,
        }
    }

    /// Registers a chain for one method on a path.
    pub fn route(&mut self, method: Method, path: &str, chain: Vec<Handler>) {
        self.routes.push(Route {
            method: Some(method),
            pattern: PathPattern::with_options(path, &self.options),
            chain,
        });
    }

    /// Registers a chain matching every method on a path.
    pub fn route_all(&mut self, path: &str, chain: Vec<Handler>) {
        self.routes.push(Route {
            method: None,
            pattern: PathPattern::with_options(path, &self.options),
            chain,
        });
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Handles an incoming request.
    ///
    /// Runs the matched route's chain in order. Each link either forwards
    /// the (possibly modified) request or short-circuits with a response.
    /// A chain that runs out of links without responding yields 404.
    pub fn handle<'a>(
        &'a self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = Response> + Send + 'a>> {
        Box::pin(async move {
            let (route, params) = match self.find_route(&request) {
                Ok(found) => found,
                Err(RouterError::NotFound { .. }) => return Response::not_found(),
                Err(RouterError::MethodNotAllowed { .. }) => {
                    return Response::method_not_allowed()
                }
            };

            let mut req = request;
            req.params = params;

            for link in &route.chain {
                match link(req).await {
                    MiddlewareResult::Continue(next) => req = next,
                    MiddlewareResult::Response(res) => return res,
                }
            }

            Response::not_found()
        })
    }

    /// Finds the first route matching the request.
    fn find_route(&self, request: &Request) -> Result<(&Route, PathParams)> {
        let mut path_matched = false;

        for route in &self.routes {
            if let Some(params) = route.pattern.match_path(&request.path) {
                path_matched = true;
                if route.method.is_none() || route.method == Some(request.method) {
                    return Ok((route, params));
                }
            }
        }

        if path_matched {
            Err(RouterError::MethodNotAllowed {
                method: request.method,
                path: request.path.clone(),
            })
        } else {
            Err(RouterError::NotFound {
                method: request.method,
                path: request.path.clone(),
            })
        }
    }
}
