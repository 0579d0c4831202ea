use crate::auth::{fingerprint_api_key, get_api_key, AuthError, API_KEY_SCHEME};
use crate::config::AuthConfig;
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a rejection body, optionally explaining the expected header format
    pub fn from_auth_error(err: AuthError, debug_mode: bool) -> Self {
        let details = debug_mode.then(|| {
            json!({
                "kind": format!("{:?}", err),
                "header_format": format!("Authorization: {API_KEY_SCHEME} <api_key>"),
            })
        });

        Self {
            error: err.code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::from_auth_error(err, false)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, API_KEY_SCHEME)],
            Json(self),
        )
            .into_response()
    }
}

/// API key presented by the caller.
///
/// Handlers can take this as an argument on routes behind
/// [`api_key_middleware`], or on their own to validate the header inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        get_api_key(&parts.headers)
            .map(ApiKey)
            .map_err(ApiError::from)
    }
}

/// Reject requests without a well-formed `ApiKey` authorization header
pub async fn api_key_middleware(
    State(config): State<Arc<AuthConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match get_api_key(request.headers()) {
        Ok(key) => {
            debug!(fingerprint = %fingerprint_api_key(&key), "API key accepted");
            request.extensions_mut().insert(ApiKey(key));
            Ok(next.run(request).await)
        }
        Err(err) => {
            debug!(code = err.code(), path = %request.uri().path(), "API key rejected");
            Err(ApiError::from_auth_error(err, config.debug_mode))
        }
    }
}
