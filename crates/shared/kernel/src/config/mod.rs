use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `EDUPATH__PAYMENT__LATENCY_MS=250`.
pub const ENV_PREFIX: &str = "EDUPATH";

/// Base name looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_NAME: &str = "edupath";

/// Custom error type for config loading.
#[edupath_derive::edupath_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **File**: an explicit `path` must exist. Without one, `edupath.{toml,json}` in the
///    working directory is used when present and skipped otherwise.
/// 2. **Environment**: variables prefixed with `EDUPATH__` override file values; nested
///    keys use double underscores (`EDUPATH__CONTACT__PHONE` maps to `contact.phone`).
///
/// # Errors
/// Returns [`ConfigError`] if an explicit file is missing or the merged values do not
/// deserialize into `T`.
///
/// # Example
/// ```rust
/// use edupath_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
