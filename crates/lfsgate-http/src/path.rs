//! Path decomposition: signer option overrides ahead of the bucket path.
//!
//! The request path between the leading `/` and the `/objects/batch` suffix
//! carries two things, in order: zero or more `key=value` override segments,
//! then the bucket path. The first segment WITHOUT a `=` ends the override
//! region; that segment and everything after it, joined with `/`, name the
//! target host and bucket.
//!
//! `region=eu-west-2/s3.eu-west-2.amazonaws.com/my-bucket` therefore yields
//! the override `region=eu-west-2` and the bucket path
//! `s3.eu-west-2.amazonaws.com/my-bucket`.
//!
//! Override keys and values are percent-decoded before validation; bucket
//! path segments are carried verbatim into the signed URL.

use percent_encoding::percent_decode_str;

use lfsgate_auth::options::{OverrideError, SignerOptions};

/// A decomposed batch-request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedPath {
    /// Validated signer option overrides, in path order.
    pub options: SignerOptions,
    /// The remaining segments joined with `/`, naming host and bucket.
    pub bucket_path: String,
}

/// Why a path failed to decompose.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PathError {
    /// An override segment was rejected.
    #[error(transparent)]
    Override(#[from] OverrideError),

    /// An override segment was not valid percent-encoded UTF-8.
    #[error("override segment is not valid percent-encoded UTF-8")]
    InvalidEncoding,

    /// Every segment was an override, leaving no bucket path.
    #[error("no bucket path after override segments")]
    MissingBucket,
}

/// Split a path (already stripped of the `/objects/batch` suffix) into
/// overrides and bucket path.
///
/// # Errors
///
/// See [`PathError`]; every variant maps to HTTP 400 upstream.
pub fn decompose(path: &str) -> Result<DecomposedPath, PathError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut options = SignerOptions::default();
    let mut bucket_start = segments.len();

    for (idx, segment) in segments.iter().enumerate() {
        let Some((key, value)) = segment.split_once('=') else {
            bucket_start = idx;
            break;
        };

        let key = decode(key)?;
        let value = decode(value)?;
        options.apply(&key, &value)?;
    }

    if bucket_start == segments.len() {
        return Err(PathError::MissingBucket);
    }

    Ok(DecomposedPath {
        options,
        bucket_path: segments[bucket_start..].join("/"),
    })
}

fn decode(raw: &str) -> Result<String, PathError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| PathError::InvalidEncoding)
}
