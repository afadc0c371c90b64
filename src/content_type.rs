/// Header name requests carry their body encoding under. Header keys are
/// normalized to lowercase when a request is constructed, so lookups use
/// the lowercase form.
pub const CONTENT_TYPE: &str = "content-type";

/// Body encodings this toolkit can decode.
///
/// There is deliberately exactly one: extending to other encodings means
/// adding variants here, not changing the request model's contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/x-www-form-urlencoded`
    FormUrlencoded,
}

impl ContentType {
    /// The literal media-type token for this classification.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::FormUrlencoded => "application/x-www-form-urlencoded",
        }
    }

    /// Whether a raw `Content-Type` header value names this encoding.
    ///
    /// Any `;`-delimited parameter suffix (`charset=UTF-8` and friends) is
    /// ignored, and the media-type token compares case-insensitively, per
    /// RFC 7231. Pure function.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        let token = raw.split(';').next().unwrap_or(raw).trim();
        token.eq_ignore_ascii_case(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(ContentType::FormUrlencoded.matches("application/x-www-form-urlencoded"));
    }

    #[test]
    fn test_parameter_suffix_ignored() {
        assert!(
            ContentType::FormUrlencoded.matches("application/x-www-form-urlencoded; charset=UTF-8")
        );
        assert!(ContentType::FormUrlencoded.matches("application/x-www-form-urlencoded;"));
    }

    #[test]
    fn test_case_insensitive_token() {
        assert!(ContentType::FormUrlencoded.matches("Application/X-WWW-Form-URLEncoded"));
        assert!(ContentType::FormUrlencoded.matches("APPLICATION/X-WWW-FORM-URLENCODED; charset=utf-8"));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert!(ContentType::FormUrlencoded.matches("  application/x-www-form-urlencoded ; charset=UTF-8"));
    }

    #[test]
    fn test_other_media_types_rejected() {
        assert!(!ContentType::FormUrlencoded.matches("application/json"));
        assert!(!ContentType::FormUrlencoded.matches("multipart/form-data; boundary=x"));
        assert!(!ContentType::FormUrlencoded.matches(""));
    }
}
