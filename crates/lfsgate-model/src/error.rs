//! The lfsgate protocol error taxonomy.
//!
//! Every failure a request can hit maps to exactly one HTTP status. All
//! errors are terminal for the request — nothing is retried — and no internal
//! detail ever reaches the client: only [`LfsError::UnsupportedHashAlgorithm`]
//! carries a message body, because it is a protocol-level negotiation response
//! the LFS client is expected to parse. Everything else is status-code only.

use crate::batch::ErrorMessage;

/// Errors surfaced by the request translation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LfsError {
    /// Basic-auth mode and the `Authorization` header is absent.
    #[error("missing Authorization header")]
    AuthMissing,

    /// The `Authorization` header is present but not a decodable
    /// `Basic user:pass` credential.
    #[error("malformed Authorization header")]
    AuthMalformed,

    /// Fixed-credential mode and the configured access key or secret is
    /// absent.
    #[error("server signing credentials are not configured")]
    Configuration,

    /// The request body is not a parseable batch request. Also covers an
    /// unrecognized operation and invalid path overrides, both of which are
    /// client-shaped-request defects.
    #[error("malformed batch request")]
    MalformedBody,

    /// The client asked for a hash algorithm other than `sha256`.
    #[error("unsupported hash algorithm '{0}'")]
    UnsupportedHashAlgorithm(String),

    /// Presigning failed (incomplete identity or unusable target).
    #[error("signing failed: {0}")]
    Signing(String),

    /// No route matches the request path.
    #[error("no such route")]
    RouteNotFound,

    /// The path exists but the method is wrong; carries the allowed method.
    #[error("method not allowed, expected {allow}")]
    MethodNotAllowed {
        /// The one method the route accepts, for the `Allow` header.
        allow: http::Method,
    },
}

impl LfsError {
    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::AuthMissing => http::StatusCode::UNAUTHORIZED,
            Self::AuthMalformed | Self::MalformedBody => http::StatusCode::BAD_REQUEST,
            Self::Configuration | Self::Signing(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnsupportedHashAlgorithm(_) => http::StatusCode::CONFLICT,
            Self::RouteNotFound => http::StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => http::StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The JSON message body, if this error carries one.
    #[must_use]
    pub fn message_body(&self) -> Option<ErrorMessage> {
        match self {
            Self::UnsupportedHashAlgorithm(algo) => Some(ErrorMessage {
                message: format!(
                    "Hash algorithm '{algo}' is not supported. Only 'sha256' is currently supported."
                ),
            }),
            _ => None,
        }
    }

    /// The `Allow` header value, for 405 responses.
    #[must_use]
    pub fn allow_header(&self) -> Option<&http::Method> {
        match self {
            Self::MethodNotAllowed { allow } => Some(allow),
            _ => None,
        }
    }
}
