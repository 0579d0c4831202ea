//! API key extraction from HTTP `Authorization` headers
//!
//! The core of this crate is [`get_api_key`], which reads a header map and
//! returns the credential from a header of the exact form:
//!
//! ```text
//! Authorization: ApiKey <credential>
//! ```
//!
//! Anything else yields one of three [`AuthError`] kinds, checked in order:
//! missing header, wrong number of space-separated tokens, wrong scheme.
//!
//! ## Usage
//!
//! ### Plain header maps:
//!
//! ```rust
//! use apikey_auth::{get_api_key, AuthError};
//! use http::{HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert("authorization", HeaderValue::from_static("ApiKey abc123"));
//! assert_eq!(get_api_key(&headers).unwrap(), "abc123");
//!
//! headers.insert("authorization", HeaderValue::from_static("Bearer abc123"));
//! assert_eq!(get_api_key(&headers), Err(AuthError::MalformedScheme));
//! ```
//!
//! ### axum routes:
//!
//! ```rust,ignore
//! use apikey_auth::{api_key_middleware, ApiKey, AuthConfig};
//!
//! let protected = Router::new()
//!     .route("/v1/whoami", get(|ApiKey(key): ApiKey| async move { key }))
//!     .layer(from_fn_with_state(Arc::new(AuthConfig::default()), api_key_middleware));
//! ```

pub mod auth;
pub mod config;
pub mod middleware;

// Re-export commonly used types and functions
pub use auth::{fingerprint_api_key, get_api_key, AuthError, API_KEY_SCHEME};
pub use config::AuthConfig;
pub use middleware::{api_key_middleware, ApiError, ApiKey};
