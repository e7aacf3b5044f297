//! Credential mode and signing identity resolution.
//!
//! The credential source is an explicit variant chosen once at startup and
//! injected into the service — there is no process-wide flag consulted per
//! request. In [`CredentialMode::Fixed`] the operator supplies the key pair
//! through configuration; in [`CredentialMode::ClientSupplied`] each request
//! carries it in a `Basic` Authorization header, with the access key id
//! before the first colon and the secret (which may itself contain colons)
//! after it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::AuthError;

/// Where signing credentials come from. Built once at startup.
#[derive(Clone)]
pub enum CredentialMode {
    /// Operator-supplied fixed credentials from process configuration.
    ///
    /// The fields are `Option` because configuration may be incomplete; the
    /// gap is surfaced per-request as
    /// [`AuthError::MissingServerCredentials`] rather than at startup,
    /// keeping the gateway up for operators who fix configuration live.
    Fixed {
        /// Configured access key id.
        access_key_id: Option<String>,
        /// Configured secret access key.
        secret_access_key: Option<String>,
        /// Configured session token, for temporary credentials.
        session_token: Option<String>,
    },
    /// Per-request credentials from the client's `Basic` Authorization
    /// header.
    ClientSupplied,
}

// Configured secrets must never appear in logs either.
impl std::fmt::Debug for CredentialMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed {
                access_key_id,
                secret_access_key,
                session_token,
            } => f
                .debug_struct("Fixed")
                .field("access_key_id", access_key_id)
                .field(
                    "secret_access_key",
                    &secret_access_key.as_ref().map(|_| "<redacted>"),
                )
                .field("session_token", &session_token.as_ref().map(|_| "<redacted>"))
                .finish(),
            Self::ClientSupplied => write!(f, "ClientSupplied"),
        }
    }
}

/// The access key, secret, and optional session token a request signs with.
///
/// Constructed fresh per request, immutable once built, never persisted.
#[derive(Clone)]
pub struct SigningIdentity {
    /// AWS access key id.
    pub access_key_id: String,
    /// AWS secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials, if any.
    pub session_token: Option<String>,
}

// The secret must never appear in logs, so Debug redacts it.
impl std::fmt::Debug for SigningIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningIdentity")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Resolve the signing identity for a request.
///
/// Pure function of the request headers and the configured mode; no side
/// effects.
///
/// # Errors
///
/// - [`AuthError::MissingServerCredentials`] in fixed mode with an absent or
///   empty access key or secret.
/// - [`AuthError::MissingAuthHeader`] in client-supplied mode when the
///   `Authorization` header is absent.
/// - [`AuthError::MalformedAuthHeader`] when the header is present but is
///   not a decodable `Basic user:pass` credential.
pub fn resolve_identity(
    headers: &http::HeaderMap,
    mode: &CredentialMode,
) -> Result<SigningIdentity, AuthError> {
    match mode {
        CredentialMode::Fixed {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            let access_key_id = access_key_id
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or(AuthError::MissingServerCredentials)?;
            let secret_access_key = secret_access_key
                .as_deref()
                .filter(|s| !s.is_empty())
                .ok_or(AuthError::MissingServerCredentials)?;

            Ok(SigningIdentity {
                access_key_id: access_key_id.to_owned(),
                secret_access_key: secret_access_key.to_owned(),
                session_token: session_token.clone(),
            })
        }
        CredentialMode::ClientSupplied => {
            let header = headers
                .get(http::header::AUTHORIZATION)
                .ok_or(AuthError::MissingAuthHeader)?
                .to_str()
                .map_err(|_| AuthError::MalformedAuthHeader)?;

            parse_basic_auth(header)
        }
    }
}

/// Parse a `Basic base64(user:pass)` Authorization header value into a
/// signing identity. The split is on the FIRST colon only: everything after
/// it, further colons included, is the secret.
fn parse_basic_auth(header: &str) -> Result<SigningIdentity, AuthError> {
    let (scheme, encoded) = header
        .split_once(' ')
        .ok_or(AuthError::MalformedAuthHeader)?;

    if scheme != "Basic" || encoded.is_empty() {
        return Err(AuthError::MalformedAuthHeader);
    }

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| AuthError::MalformedAuthHeader)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::MalformedAuthHeader)?;

    let (user, pass) = decoded
        .split_once(':')
        .ok_or(AuthError::MalformedAuthHeader)?;

    Ok(SigningIdentity {
        access_key_id: user.to_owned(),
        secret_access_key: pass.to_owned(),
        session_token: None,
    })
}
