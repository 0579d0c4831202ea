use http::{header::AUTHORIZATION, HeaderMap};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Scheme literal that must precede the credential
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Reasons a request carries no usable API key
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no auth info found")]
    MissingAuthHeader,
    #[error("malformed auth header")]
    MalformedAuthHeader,
    #[error("malformed first part of auth")]
    MalformedScheme,
}

impl AuthError {
    /// Stable identifier for the error kind, suitable for JSON bodies
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "missing_auth_header",
            AuthError::MalformedAuthHeader => "malformed_auth_header",
            AuthError::MalformedScheme => "malformed_scheme",
        }
    }
}

/// Extract an API key from the `Authorization` header of a request.
///
/// The value must be exactly `ApiKey <credential>`: one space, a
/// case-sensitive scheme, and no surrounding whitespace. The credential is
/// returned verbatim and may be empty. Tokens are compared as raw bytes, so
/// only a credential that is not valid UTF-8 is rejected for its encoding.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingAuthHeader),
    };

    let parts: Vec<&[u8]> = value.as_bytes().split(|&b| b == b' ').collect();
    if parts.len() != 2 {
        return Err(AuthError::MalformedAuthHeader);
    }

    if parts[0] != API_KEY_SCHEME.as_bytes() {
        return Err(AuthError::MalformedScheme);
    }

    // a credential that is not UTF-8 cannot be returned verbatim as text
    std::str::from_utf8(parts[1])
        .map(str::to_string)
        .map_err(|_| AuthError::MalformedAuthHeader)
}

/// Hash an API key using SHA-256 so it can be logged without leaking it
pub fn fingerprint_api_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(
            get_api_key(&HeaderMap::new()),
            Err(AuthError::MissingAuthHeader)
        );
        assert_eq!(get_api_key(&headers_with("")), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_token_count() {
        assert_eq!(
            get_api_key(&headers_with("ApiKey")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            get_api_key(&headers_with("ApiKey one two")),
            Err(AuthError::MalformedAuthHeader)
        );
        // consecutive spaces produce an empty token rather than collapsing
        assert_eq!(
            get_api_key(&headers_with("ApiKey  abc")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        assert_eq!(
            get_api_key(&headers_with("Bearer abc123")),
            Err(AuthError::MalformedScheme)
        );
        assert_eq!(
            get_api_key(&headers_with("apikey abc123")),
            Err(AuthError::MalformedScheme)
        );
        assert_eq!(
            get_api_key(&headers_with(" abc123")),
            Err(AuthError::MalformedScheme)
        );
    }

    #[test]
    fn test_valid_key() {
        assert_eq!(get_api_key(&headers_with("ApiKey abc123")).unwrap(), "abc123");
    }

    #[test]
    fn test_empty_credential_is_accepted() {
        assert_eq!(get_api_key(&headers_with("ApiKey ")).unwrap(), "");
    }

    fn raw_headers(value: &[u8]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_bytes(value).unwrap());
        headers
    }

    #[test]
    fn test_non_utf8_value() {
        // scheme and arity are decided on bytes before the credential is decoded
        assert_eq!(
            get_api_key(&raw_headers(b"Bearer \xff")),
            Err(AuthError::MalformedScheme)
        );
        assert_eq!(
            get_api_key(&raw_headers(b"ApiKey \xff \xfe")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            get_api_key(&raw_headers(b"\xffApiKey abc")),
            Err(AuthError::MalformedScheme)
        );
        assert_eq!(
            get_api_key(&raw_headers(b"ApiKey \xff\xfe")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn test_utf8_credential_is_accepted() {
        assert_eq!(
            get_api_key(&raw_headers("ApiKey cl\u{e9}".as_bytes())).unwrap(),
            "cl\u{e9}"
        );
    }

    #[test]
    fn test_error_messages_and_codes() {
        assert_eq!(AuthError::MissingAuthHeader.to_string(), "no auth info found");
        assert_eq!(AuthError::MalformedAuthHeader.to_string(), "malformed auth header");
        assert_eq!(
            AuthError::MalformedScheme.to_string(),
            "malformed first part of auth"
        );
        assert_eq!(AuthError::MalformedScheme.code(), "malformed_scheme");
    }

    #[test]
    fn test_fingerprint_api_key() {
        let fingerprint = fingerprint_api_key("abc123");
        assert_eq!(fingerprint.len(), 64);
        assert_eq!(fingerprint, fingerprint_api_key("abc123"));
        assert_ne!(fingerprint, fingerprint_api_key("abc124"));
    }
}
