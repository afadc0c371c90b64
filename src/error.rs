use std::fmt;

/// Errors produced by the request/dispatch layer.
///
/// Every variant is reported to the immediate caller; controllers never
/// recover from these themselves. The server maps each variant to an HTTP
/// status via [`HttpError::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// A decoded body view was requested but the request carries no
    /// supported `Content-Type`.
    ///
    /// `content_type` is `None` when the header was missing entirely, or
    /// the raw header value when it named an encoding this toolkit does
    /// not decode.
    UnsupportedBodyType {
        /// The offending `Content-Type` value, if one was present
        content_type: Option<String>,
    },
    /// A percent escape in a form-encoded body could not be decoded.
    MalformedEncoding {
        /// The field that failed to decode
        input: String,
    },
    /// The account store rejected a new account with an already-taken id.
    AccountConflict {
        /// The duplicate user id
        user_id: String,
    },
    /// A static asset was requested that does not exist under the base
    /// directory (or escaped it).
    NotFound {
        /// The requested path
        path: String,
    },
}

impl HttpError {
    /// HTTP status code the server answers with when this error escapes a
    /// controller.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            HttpError::UnsupportedBodyType { .. } | HttpError::MalformedEncoding { .. } => 400,
            HttpError::AccountConflict { .. } => 409,
            HttpError::NotFound { .. } => 404,
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::UnsupportedBodyType { content_type: None } => {
                write!(f, "request has no Content-Type header, body cannot be decoded")
            }
            HttpError::UnsupportedBodyType {
                content_type: Some(ct),
            } => {
                write!(f, "unsupported body encoding, Content-Type={}", ct)
            }
            HttpError::MalformedEncoding { input } => {
                write!(f, "malformed percent-encoding in '{}'", input)
            }
            HttpError::AccountConflict { user_id } => {
                write!(f, "account '{}' already exists", user_id)
            }
            HttpError::NotFound { path } => {
                write!(f, "not found: {}", path)
            }
        }
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = HttpError::UnsupportedBodyType { content_type: None };
        assert_eq!(err.status(), 400);
        let err = HttpError::MalformedEncoding {
            input: "%zz".to_string(),
        };
        assert_eq!(err.status(), 400);
        let err = HttpError::AccountConflict {
            user_id: "red".to_string(),
        };
        assert_eq!(err.status(), 409);
        let err = HttpError::NotFound {
            path: "/nope.html".to_string(),
        };
        assert_eq!(err.status(), 404);
    }

    #[test]
    fn test_display_carries_content_type() {
        let err = HttpError::UnsupportedBodyType {
            content_type: Some("application/json".to_string()),
        };
        assert!(err.to_string().contains("application/json"));
    }
}
