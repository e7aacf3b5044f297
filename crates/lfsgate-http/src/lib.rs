//! HTTP layer of lfsgate: routing, batch translation, and the hyper service.
//!
//! This crate turns an incoming HTTP request into a Git LFS batch response
//! full of presigned URLs:
//!
//! 1. [`router`] matches the path and method (`/` homepage redirect,
//!    `**/objects/batch` translation pipeline).
//! 2. [`lfsgate_auth::resolve_identity`] picks the signing credentials.
//! 3. [`path`] splits leading `key=value` override segments from the bucket
//!    path.
//! 4. [`translate`] parses the batch body, validates the hash algorithm,
//!    and fans out one signing task per object.
//! 5. [`response`] shapes the success and error responses; [`service`] ties
//!    the pipeline into a hyper `Service` that never lets an internal
//!    failure escape unshaped.
//!
//! Everything is request-scoped: no state survives a request, and no locks
//! are needed across them.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven gateway configuration
//! - [`path`] - Path decomposition into overrides + bucket path
//! - [`router`] - Route resolution
//! - [`translate`] - Batch request translation with concurrent signing
//! - [`response`] - Response construction helpers
//! - [`body`] - The buffered-or-empty response body type
//! - [`service`] - The hyper `Service` implementation

pub mod body;
pub mod config;
pub mod path;
pub mod response;
pub mod router;
pub mod service;
pub mod translate;

pub use body::LfsResponseBody;
pub use config::ProxyConfig;
pub use router::HOMEPAGE;
pub use service::LfsService;
