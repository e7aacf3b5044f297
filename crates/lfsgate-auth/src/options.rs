//! Per-request signer option overrides and target resolution.
//!
//! Operators embed signing configuration in the URL path ahead of the bucket
//! name (`region=eu-west-2/my-host/my-bucket/objects/batch`), avoiding
//! per-bucket configuration files. The override set is a typed whitelist —
//! an unrecognized key is rejected rather than silently merged into the
//! signer's options.
//!
//! Recognized keys:
//!
//! | key        | effect |
//! |------------|--------|
//! | `region`   | SigV4 credential-scope region |
//! | `service`  | SigV4 service name (default `s3`) |
//! | `endpoint` | `scheme://host[:port]` replacing the default target derivation |
//! | `expiry`   | presign validity window in seconds |

use crate::error::SignError;

/// Default credential-scope region when none is given or inferable.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default SigV4 service name.
pub const DEFAULT_SERVICE: &str = "s3";

/// A rejected path override.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The override key is not in the whitelist.
    #[error("unknown override key '{0}'")]
    UnknownKey(String),

    /// The override value does not parse for its key.
    #[error("invalid value '{value}' for override '{key}'")]
    InvalidValue {
        /// The whitelisted key.
        key: &'static str,
        /// The value that failed to parse.
        value: String,
    },
}

/// Signer options assembled from path overrides. All fields optional;
/// resolution falls back to inference or defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignerOptions {
    /// Explicit credential-scope region.
    pub region: Option<String>,
    /// Explicit SigV4 service name.
    pub service: Option<String>,
    /// Explicit `scheme://host[:port]` target endpoint.
    pub endpoint: Option<String>,
    /// Per-request expiry override in seconds.
    pub expiry: Option<u64>,
}

impl SignerOptions {
    /// Apply one `key=value` override.
    ///
    /// # Errors
    ///
    /// [`OverrideError::UnknownKey`] for keys outside the whitelist,
    /// [`OverrideError::InvalidValue`] for values that do not parse.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), OverrideError> {
        match key {
            "region" => self.region = Some(value.to_owned()),
            "service" => self.service = Some(value.to_owned()),
            "endpoint" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(OverrideError::InvalidValue {
                        key: "endpoint",
                        value: value.to_owned(),
                    });
                }
                self.endpoint = Some(value.to_owned());
            }
            "expiry" => {
                let seconds = value.parse().map_err(|_| OverrideError::InvalidValue {
                    key: "expiry",
                    value: value.to_owned(),
                })?;
                self.expiry = Some(seconds);
            }
            _ => return Err(OverrideError::UnknownKey(key.to_owned())),
        }
        Ok(())
    }

    /// The SigV4 service name, defaulting to `s3`.
    #[must_use]
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// The credential-scope region for the given target host: the explicit
    /// override if set, otherwise inferred from an `amazonaws.com` host,
    /// otherwise `us-east-1`.
    #[must_use]
    pub fn resolve_region(&self, host: &str) -> String {
        self.region
            .clone()
            .or_else(|| infer_region(host))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned())
    }

    /// Derive the signing target from the decomposed bucket path.
    ///
    /// Without an `endpoint` override the first bucket-path segment is the
    /// target host (scheme `https`) and the remaining segments become the
    /// path prefix, matching the `https://<bucket-path>/<key>` shape of the
    /// signed URL. With an override, the override supplies scheme and host
    /// and the entire bucket path becomes the path prefix.
    ///
    /// # Errors
    ///
    /// [`SignError::MissingHost`] when no host can be derived,
    /// [`SignError::InvalidEndpoint`] when the override has no host part.
    pub fn resolve_target(&self, bucket_path: &str) -> Result<SignTarget, SignError> {
        if let Some(endpoint) = &self.endpoint {
            let (scheme, rest) = endpoint
                .split_once("://")
                .ok_or_else(|| SignError::InvalidEndpoint(endpoint.clone()))?;
            let host = rest.split('/').next().unwrap_or("");
            if host.is_empty() {
                return Err(SignError::InvalidEndpoint(endpoint.clone()));
            }

            return Ok(SignTarget {
                scheme: scheme.to_owned(),
                host: host.to_owned(),
                path_prefix: bucket_path.trim_matches('/').to_owned(),
            });
        }

        let bucket_path = bucket_path.trim_matches('/');
        if bucket_path.is_empty() {
            return Err(SignError::MissingHost);
        }

        let (host, prefix) = match bucket_path.split_once('/') {
            Some((host, prefix)) => (host, prefix),
            None => (bucket_path, ""),
        };

        Ok(SignTarget {
            scheme: "https".to_owned(),
            host: host.to_owned(),
            path_prefix: prefix.to_owned(),
        })
    }
}

/// The scheme, host, and path prefix a presigned URL points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignTarget {
    /// URL scheme, `https` unless an endpoint override says otherwise.
    pub scheme: String,
    /// Target host, possibly with a port.
    pub host: String,
    /// Path segments between the host and the object key, `/`-joined,
    /// possibly empty.
    pub path_prefix: String,
}

/// Infer the region from an `amazonaws.com` host name.
///
/// Handles `s3.<region>.amazonaws.com`, `<bucket>.s3.<region>.amazonaws.com`,
/// the dualstack variants, and the legacy regionless `s3.amazonaws.com`
/// (us-east-1). Any other host yields `None`.
fn infer_region(host: &str) -> Option<String> {
    let host = host.split(':').next().unwrap_or(host);
    let rest = host.strip_suffix(".amazonaws.com")?;
    let labels: Vec<&str> = rest.split('.').collect();

    let s3_idx = labels.iter().position(|l| *l == "s3")?;
    match labels.get(s3_idx + 1) {
        Some(&"dualstack") => labels.get(s3_idx + 2).map(|r| (*r).to_owned()),
        Some(region) => Some((*region).to_owned()),
        None => Some(DEFAULT_REGION.to_owned()),
    }
}
