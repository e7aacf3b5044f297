//! Error types for credential resolution and presigning.

/// Errors raised while resolving the signing identity for a request.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    /// Client-supplied mode and the `Authorization` header is absent.
    #[error("missing Authorization header")]
    MissingAuthHeader,

    /// The `Authorization` header is not a decodable `Basic` credential:
    /// wrong scheme, empty payload, invalid base64, non-UTF-8 content, or no
    /// `:` separator after decoding.
    #[error("malformed Authorization header")]
    MalformedAuthHeader,

    /// Fixed-credential mode and the configured access key or secret is
    /// absent from process configuration.
    #[error("server signing credentials are not configured")]
    MissingServerCredentials,
}

/// Errors raised while constructing a presigned URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignError {
    /// The signing identity has an empty access key id.
    #[error("signing identity has no access key id")]
    MissingAccessKey,

    /// The signing identity has an empty secret access key.
    #[error("signing identity has no secret access key")]
    MissingSecretKey,

    /// No target host could be derived from the request path.
    #[error("no target host in bucket path")]
    MissingHost,

    /// The `endpoint` override is not a usable `scheme://host` value.
    #[error("invalid endpoint override: {0}")]
    InvalidEndpoint(String),
}
