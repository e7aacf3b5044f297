//! Git LFS batch protocol model for lfsgate.
//!
//! This crate defines the wire types of the [Git LFS batch API] — the single
//! endpoint an LFS client uses to negotiate upload/download URLs for a set of
//! content-addressed objects — together with the protocol error taxonomy and
//! its HTTP status mapping.
//!
//! The types here are purely request-scoped data: nothing is persisted, and
//! nothing carries state across requests.
//!
//! [Git LFS batch API]: https://github.com/git-lfs/git-lfs/blob/main/docs/api/batch.md
//!
//! # Modules
//!
//! - [`batch`] - Batch request/response wire shapes
//! - [`error`] - The [`LfsError`] taxonomy with exact HTTP status mapping

pub mod batch;
pub mod error;

pub use batch::{
    Actions, BatchRequest, BatchResponse, ErrorMessage, LFS_MEDIA_TYPE, ObjectAction, Operation,
    RequestObject, ResponseObject, SHA256,
};
pub use error::LfsError;
