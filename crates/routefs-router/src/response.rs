//! Response model for chain dispatch.

use std::collections::HashMap;

/// What a chain link produces when it short-circuits, and what dispatch
/// ultimately returns.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Headers, stored under lowercased names.
    headers: HashMap<String, String>,
    /// Body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an empty response with the given status.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// A 200 response with a plain-text body.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_status(200)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body.into().into_bytes())
    }

    /// A 200 response with a JSON body, or a 500 when serialization fails.
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        serde_json::to_vec(data).map_or_else(
            |_| Self::internal_server_error(),
            |body| {
                Self::with_status(200)
                    .header("Content-Type", "application/json")
                    .body(body)
            },
        )
    }

    /// A 401 Unauthorized response.
    pub fn unauthorized() -> Self {
        Self::plain(401, "Unauthorized")
    }

    /// A 404 Not Found response.
    pub fn not_found() -> Self {
        Self::plain(404, "Not Found")
    }

    /// A 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::plain(405, "Method Not Allowed")
    }

    /// A 500 Internal Server Error response.
    pub fn internal_server_error() -> Self {
        Self::plain(500, "Internal Server Error")
    }

    fn plain(status: u16, reason: &str) -> Self {
        Self::with_status(status)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(reason.as_bytes().to_vec())
    }

    /// Sets a header, replacing any previous value under the same name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_lowercase(), value.into());
        self
    }

    /// Replaces the status code.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Replaces the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Looks up a header by name, case-insensitively.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// The body decoded as UTF-8, if it is valid.
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::with_status(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_sets_status_and_content_type() {
        let res = Response::text("hello");
        assert_eq!(res.status, 200);
        assert_eq!(
            res.get_header("content-type"),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(res.body_string(), Some("hello".to_string()));
    }

    #[test]
    fn json_serializes_the_value() {
        let res = Response::json(&serde_json::json!({"ok": true}));
        assert_eq!(res.status, 200);
        assert_eq!(res.get_header("Content-Type"), Some("application/json"));
        assert_eq!(res.body_string(), Some(r#"{"ok":true}"#.to_string()));
    }

    #[test]
    fn builders_replace_status_header_and_body() {
        let res = Response::with_status(201)
            .header("X-Request-Id", "7")
            .body("created");
        assert_eq!(res.status, 201);
        assert_eq!(res.get_header("x-request-id"), Some("7"));
        assert_eq!(res.body_string(), Some("created".to_string()));
    }

    #[test]
    fn error_helpers_carry_a_reason_body() {
        assert_eq!(Response::unauthorized().status, 401);
        assert_eq!(
            Response::not_found().body_string(),
            Some("Not Found".to_string())
        );
        assert_eq!(Response::method_not_allowed().status, 405);
        assert_eq!(Response::internal_server_error().status, 500);
    }
}
