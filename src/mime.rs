//! MIME type resolution for static assets.

/// Known content types, matched against a file name by suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MimeType {
    ApplicationJs,
    TextCss,
    ImagePng,
    ImageSvg,
    FontTtf,
    FontWoff,
    FontWoff2,
    FontEot,
    TextHtml,
}

impl MimeType {
    /// Every known type, in resolution order. `from_file_name` takes the
    /// first suffix match from this list, so the order is part of the
    /// contract.
    pub const ALL: [MimeType; 9] = [
        MimeType::ApplicationJs,
        MimeType::TextCss,
        MimeType::ImagePng,
        MimeType::ImageSvg,
        MimeType::FontTtf,
        MimeType::FontWoff,
        MimeType::FontWoff2,
        MimeType::FontEot,
        MimeType::TextHtml,
    ];

    /// Canonical content-type string, as sent in `Content-Type` headers.
    #[must_use]
    pub fn value(&self) -> &'static str {
        match self {
            MimeType::ApplicationJs => "application/js",
            MimeType::TextCss => "text/css",
            MimeType::ImagePng => "image/png",
            MimeType::ImageSvg => "image/svg+xml",
            MimeType::FontTtf => "font/ttf",
            MimeType::FontWoff => "font/woff",
            MimeType::FontWoff2 => "font/woff2",
            MimeType::FontEot => "application/vnd.ms-fontobject",
            MimeType::TextHtml => "text/html",
        }
    }

    /// The file-name suffix this type matches.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            MimeType::ApplicationJs => "js",
            MimeType::TextCss => "css",
            MimeType::ImagePng => "png",
            MimeType::ImageSvg => "svg",
            MimeType::FontTtf => "ttf",
            MimeType::FontWoff => "woff",
            MimeType::FontWoff2 => "woff2",
            MimeType::FontEot => "eot",
            MimeType::TextHtml => "html",
        }
    }

    /// Resolve a file name to its content type; `text/html` when nothing
    /// matches. Total, never fails.
    ///
    /// Matching is a literal string-suffix check, not an extension check:
    /// `"abcss"` resolves to `text/css` because it ends in `css`. Kept for
    /// compatibility with existing deployments; see the pinning test below
    /// before changing it.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> MimeType {
        Self::ALL
            .iter()
            .copied()
            .find(|mime| file_name.ends_with(mime.suffix()))
            .unwrap_or(MimeType::TextHtml)
    }
}
