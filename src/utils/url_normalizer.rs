//! Target URL validation and normalization.
//!
//! The shortening core stores whatever string it is given, so every entry point that
//! accepts a URL from outside (HTTP handlers, the admin CLI) runs it through
//! [`normalize_url`] first.

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,
}

/// Parses `input` as an absolute HTTP(S) URL and returns its serialized form.
///
/// Serialization through [`Url`] lowercases the host, drops default ports and adds the
/// root path, so `https://Example.COM:443` becomes `https://example.com/`.
/// Query strings and fragments are kept as given.
///
/// # Errors
///
/// - [`UrlNormalizationError::InvalidFormat`] for relative or malformed input
/// - [`UrlNormalizationError::UnsupportedProtocol`] for schemes other than http/https
/// - [`UrlNormalizationError::MissingHost`] for URLs without a host
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol);
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_root_path() {
        assert_eq!(
            normalize_url("https://www.example.com").unwrap(),
            "https://www.example.com/"
        );
    }

    #[test]
    fn test_normalize_lowercases_host() {
        assert_eq!(
            normalize_url("https://EXAMPLE.COM/Path").unwrap(),
            "https://example.com/Path"
        );
    }

    #[test]
    fn test_normalize_drops_default_port() {
        assert_eq!(
            normalize_url("https://example.com:443/a").unwrap(),
            "https://example.com/a"
        );
        assert_eq!(
            normalize_url("http://example.com:8080/a").unwrap(),
            "http://example.com:8080/a"
        );
    }

    #[test]
    fn test_normalize_keeps_query_and_fragment() {
        assert_eq!(
            normalize_url("https://example.com/s?q=rust#top").unwrap(),
            "https://example.com/s?q=rust#top"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/x  ").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(
            normalize_url("not-a-valid-url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(normalize_url("").is_err());
    }

    #[test]
    fn test_unsupported_schemes_rejected() {
        for input in ["ftp://example.com", "javascript:alert(1)", "mailto:a@b.c"] {
            assert_eq!(
                normalize_url(input),
                Err(UrlNormalizationError::UnsupportedProtocol),
                "{input}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            UrlNormalizationError::UnsupportedProtocol.to_string(),
            "Only HTTP and HTTPS protocols are allowed"
        );
        assert!(
            normalize_url("nope")
                .unwrap_err()
                .to_string()
                .starts_with("Invalid URL format")
        );
    }
}
