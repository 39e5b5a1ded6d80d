//! # routefs-router
//!
//! A lightweight HTTP router built around ordered handler chains.
//!
//! This crate provides:
//! - Path pattern matching with `:param` and `*rest` segments
//! - HTTP method-based routing, including any-method routes
//! - Middleware as ordinary chain links that can short-circuit
//! - Async dispatch
//!
//! Every link in a route's chain has the same shape: it receives the
//! [`Request`] and either passes it on to the next link or produces a
//! [`Response`] immediately. The last link is conventionally the terminal
//! handler.
//!
//! ## Quick Start
//!
//! ```ignore
//! use routefs_router::{handler_fn, middleware_fn, Method, MiddlewareResult, Request, Response, Router};
//!
//! let mut router = Router::new();
//!
//! router.route(
//!     Method::Get,
//!     "/users/:id",
//!     vec![
//!         middleware_fn(|req: Request| async move {
//!             if req.get_header("Authorization").is_none() {
//!                 return MiddlewareResult::Response(Response::unauthorized());
//!             }
//!             MiddlewareResult::Continue(req)
//!         }),
//!         handler_fn(|req: Request| async move {
//!             let id = req.params.get("id").unwrap_or("unknown");
//!             Response::text(format!("User: {id}"))
//!         }),
//!     ],
//! );
//!
//! let response = router.handle(Request::get("/users/123")).await;
//! ```
//!
//! ## Path Parameters
//!
//! Routes can include dynamic segments using `:name` syntax, and a trailing
//! `*name` segment captures the remainder of the path:
//!
//! ```ignore
//! router.route(Method::Get, "/posts/:post_id/comments/:comment_id", chain);
//! router.route(Method::Get, "/files/*path", chain);
//! ```
//!
//! Matched values are available in `request.params`.

mod error;
mod path;
mod request;
mod response;
mod router;

pub use error::{Result, RouterError};
pub use path::PathPattern;
pub use request::{Method, PathParams, Request};
pub use response::Response;
pub use router::{
    handler_fn, middleware_fn, BoxFuture, Handler, MiddlewareResult, Router, RouterOptions,
};
