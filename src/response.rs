//! The response a controller hands back to the server.

use serde_json::Value;

/// Response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// No body (redirects).
    Empty,
    /// Fully-buffered bytes, content type carried in the header lines.
    Bytes(Vec<u8>),
    /// A named view rendered by the server's template loader, with the
    /// model as template context.
    View {
        /// Template name relative to the templates dir, without extension
        name: String,
        /// Context the template renders with
        model: Value,
    },
}

/// Status, ordered header lines and body.
///
/// Headers are literal `"Name: Value"` lines kept in insertion order —
/// the order is observable (tests assert on it) and lines are never
/// removed once added. Mutable while a controller builds it, treated as
/// immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Vec<String>,
    body: ResponseBody,
}

impl Response {
    /// An empty `200 OK` response.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: ResponseBody::Empty,
        }
    }

    /// A `302 Found` redirect carrying a single `Location` header.
    #[must_use]
    pub fn redirect(location: &str) -> Self {
        let mut response = Self::new();
        response.status = 302;
        response.add_header(format!("Location: {}", location));
        response
    }

    /// A `200 OK` response bound to a view and its model.
    #[must_use]
    pub fn view(name: impl Into<String>, model: Value) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: ResponseBody::View {
                name: name.into(),
                model,
            },
        }
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Append a literal `"Name: Value"` header line.
    pub fn add_header(&mut self, line: impl Into<String>) {
        self.headers.push(line.into());
    }

    pub fn set_body(&mut self, bytes: Vec<u8>) {
        self.body = ResponseBody::Bytes(bytes);
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    /// View name, when the body is view-bound.
    #[must_use]
    pub fn view_name(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::View { name, .. } => Some(name),
            _ => None,
        }
    }

    /// View model, when the body is view-bound.
    #[must_use]
    pub fn model(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::View { model, .. } => Some(model),
            _ => None,
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}
