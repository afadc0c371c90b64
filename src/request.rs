//! The parsed HTTP request model.

use crate::content_type::{ContentType, CONTENT_TYPE};
use crate::error::HttpError;
use crate::form;
use http::Method;
use std::collections::HashMap;

/// One parsed HTTP request.
///
/// Constructed once per incoming request (by the wire layer in
/// [`crate::server`], or directly in tests) and immutable afterwards.
/// Header keys are normalized to lowercase at construction, so header
/// access is case-insensitive regardless of what the client sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    method: Method,
    path: String,
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
    body: String,
}

impl HttpRequest {
    /// Assemble a request from already-split parts.
    ///
    /// `path` must not contain a query string; decoded query parameters go
    /// in `params`. Duplicate header names keep the last value.
    #[must_use]
    pub fn new(
        method: Method,
        path: impl Into<String>,
        params: HashMap<String, String>,
        headers: HashMap<String, String>,
        body: impl Into<String>,
    ) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            method,
            path: path.into(),
            params,
            headers,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Decoded query parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Header value by name (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Raw body as received. May be empty.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Cookies from the `Cookie` header, split on `;` with the name/value
    /// split on the first `=`. Absent header yields an empty map.
    #[must_use]
    pub fn cookies(&self) -> HashMap<String, String> {
        self.header("cookie")
            .map(|c| {
                c.split(';')
                    .filter_map(|pair| {
                        let mut parts = pair.trim().splitn(2, '=');
                        let name = parts.next()?.trim().to_string();
                        let value = parts.next().unwrap_or("").trim().to_string();
                        Some((name, value))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Cookie value by name.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies().remove(name)
    }

    /// Decode the body as form fields.
    ///
    /// Requires a `Content-Type` header classifying as form-urlencoded;
    /// a missing or unrecognized header is an
    /// [`HttpError::UnsupportedBodyType`], never a silent empty map.
    /// Recomputed per call; the request itself stays untouched.
    pub fn form_body(&self) -> Result<HashMap<String, String>, HttpError> {
        let raw = match self.header(CONTENT_TYPE) {
            Some(raw) => raw,
            None => return Err(HttpError::UnsupportedBodyType { content_type: None }),
        };
        if ContentType::FormUrlencoded.matches(raw) {
            return form::decode(&self.body);
        }
        Err(HttpError::UnsupportedBodyType {
            content_type: Some(raw.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_request(body: &str) -> HttpRequest {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        HttpRequest::new(Method::POST, "/user/create", HashMap::new(), headers, body)
    }

    #[test]
    fn test_form_body_decodes_fields() {
        let req = form_request("userId=red&password=1234");
        let fields = req.form_body().unwrap();
        assert_eq!(fields.get("userId"), Some(&"red".to_string()));
        assert_eq!(fields.get("password"), Some(&"1234".to_string()));
    }

    #[test]
    fn test_form_body_without_content_type_fails() {
        let req = HttpRequest::new(
            Method::POST,
            "/user/create",
            HashMap::new(),
            HashMap::new(),
            "userId=red",
        );
        assert_eq!(
            req.form_body().unwrap_err(),
            HttpError::UnsupportedBodyType { content_type: None }
        );
    }

    #[test]
    fn test_form_body_with_charset_parameter_succeeds() {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded; charset=UTF-8".to_string(),
        );
        let req = HttpRequest::new(
            Method::POST,
            "/user/create",
            HashMap::new(),
            headers,
            "userId=red",
        );
        assert_eq!(
            req.form_body().unwrap().get("userId"),
            Some(&"red".to_string())
        );
    }

    #[test]
    fn test_form_body_with_other_content_type_carries_value() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let req = HttpRequest::new(
            Method::POST,
            "/user/create",
            HashMap::new(),
            headers,
            "{}",
        );
        assert_eq!(
            req.form_body().unwrap_err(),
            HttpError::UnsupportedBodyType {
                content_type: Some("application/json".to_string())
            }
        );
    }

    #[test]
    fn test_form_body_decode_error_propagates() {
        let req = form_request("userId=%zz");
        assert!(matches!(
            req.form_body().unwrap_err(),
            HttpError::MalformedEncoding { .. }
        ));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Custom".to_string(), "yes".to_string());
        let req = HttpRequest::new(Method::GET, "/", HashMap::new(), headers, "");
        assert_eq!(req.header("x-custom"), Some("yes"));
        assert_eq!(req.header("X-CUSTOM"), Some("yes"));
    }

    #[test]
    fn test_cookie_parsing() {
        let mut headers = HashMap::new();
        headers.insert("Cookie".to_string(), "logined=true; theme=dark".to_string());
        let req = HttpRequest::new(Method::GET, "/user/list", HashMap::new(), headers, "");
        assert_eq!(req.cookie("logined"), Some("true".to_string()));
        assert_eq!(req.cookie("theme"), Some("dark".to_string()));
        assert_eq!(req.cookie("missing"), None);
    }

    #[test]
    fn test_cookies_empty_without_header() {
        let req = HttpRequest::new(Method::GET, "/", HashMap::new(), HashMap::new(), "");
        assert!(req.cookies().is_empty());
    }
}
