//! Credential resolution and presigned URL generation for lfsgate.
//!
//! This crate owns the signing side of the gateway: deciding which AWS
//! access key/secret pair a request signs with, and turning (identity,
//! target, object key, verb, expiry) into an AWS Signature Version 4
//! presigned URL.
//!
//! Two credential sources are supported, selected once at startup:
//!
//! - **Fixed**: the operator configures an access key, secret, and optional
//!   session token; clients need no credentials of their own.
//! - **Client-supplied**: each request carries `Authorization: Basic
//!   base64(access_key_id:secret_access_key)` and the gateway signs with
//!   whatever the client presented. The object store, not the gateway, is
//!   the authority that decides whether those credentials are any good.
//!
//! Signing is a pure computation — no network call is made, and a signed URL
//! is returned to the client without ever being dereferenced here.
//!
//! # Modules
//!
//! - [`credentials`] - Credential mode, signing identity, Basic-auth parsing
//! - [`options`] - Per-request signer option overrides and target resolution
//! - [`presign`] - SigV4 query-string presigning
//! - [`error`] - Error types

pub mod credentials;
pub mod error;
pub mod options;
pub mod presign;

pub use credentials::{CredentialMode, SigningIdentity, resolve_identity};
pub use error::{AuthError, SignError};
pub use options::{OverrideError, SignTarget, SignerOptions};
pub use presign::{DEFAULT_EXPIRY_SECONDS, MAX_EXPIRY_SECONDS, Presigner};
