//! Gateway configuration, driven by environment variables.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LFSGATE_LISTEN` | `0.0.0.0:8080` | Bind address |
//! | `USE_SERVER_CREDS` | `false` | Sign with operator credentials instead of client Basic auth |
//! | `AWS_ACCESS_KEY_ID` | *(unset)* | Fixed-mode access key |
//! | `AWS_SECRET_ACCESS_KEY` | *(unset)* | Fixed-mode secret |
//! | `AWS_SESSION_TOKEN` | *(unset)* | Fixed-mode session token (optional) |
//! | `LFSGATE_EXPIRY` | `3600` | Default presign validity in seconds |
//! | `LOG_LEVEL` | `info` | Log level filter when `RUST_LOG` is unset |

use lfsgate_auth::credentials::CredentialMode;
use lfsgate_auth::presign::DEFAULT_EXPIRY_SECONDS;

/// Gateway configuration, built once at startup and shared read-only by
/// every request.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Bind address for the listener.
    pub listen: String,
    /// Where signing credentials come from.
    pub credential_mode: CredentialMode,
    /// Presign validity in seconds when no `expiry` override is present.
    pub default_expiry: u64,
    /// Log level filter.
    pub log_level: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_owned(),
            credential_mode: CredentialMode::ClientSupplied,
            default_expiry: DEFAULT_EXPIRY_SECONDS,
            log_level: "info".to_owned(),
        }
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LFSGATE_LISTEN") {
            config.listen = v;
        }
        if std::env::var("USE_SERVER_CREDS").is_ok_and(|v| parse_bool(&v)) {
            config.credential_mode = CredentialMode::Fixed {
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").ok(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").ok(),
                session_token: std::env::var("AWS_SESSION_TOKEN").ok(),
            };
        }
        if let Some(v) = std::env::var("LFSGATE_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.default_expiry = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }
}

fn parse_bool(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}
