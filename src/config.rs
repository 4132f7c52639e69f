//! Application configuration loaded from environment variables.
//!
//! Every variable is optional:
//! - `NUMFIELD_MIN` / `NUMFIELD_MAX`: integer bounds of the field
//! - `NUMFIELD_PLACEHOLDER`: floating label text
//! - `NUMFIELD_HEADING`: label the host renders above the field
//! - `NUMFIELD_LOG_FILE`: file that receives tracing output

use std::path::PathBuf;

/// Default lower bound.
pub const DEFAULT_MIN: i64 = -100_000;

/// Default upper bound.
pub const DEFAULT_MAX: i64 = 100_000;

/// Default placeholder label.
pub const DEFAULT_PLACEHOLDER: &str = "Enter a number";

/// Default heading shown above the field.
pub const DEFAULT_HEADING: &str = "Enter a number";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub field: FieldConfig,
    pub heading: String,
    pub log_file: Option<PathBuf>,
}

/// Configuration the host hands to a numeric field.
///
/// Fixed for the field's lifetime. The bounds are private so `min <= max`
/// always holds once constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    min: i64,
    max: i64,
    placeholder: String,
}

impl FieldConfig {
    /// Creates a field configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NumfieldError::Config`](crate::NumfieldError::Config) if
    /// `min` is greater than `max`.
    pub fn new(min: i64, max: i64, placeholder: impl Into<String>) -> crate::Result<Self> {
        if min > max {
            return Err(crate::NumfieldError::Config(format!(
                "minimum {min} is greater than maximum {max}"
            )));
        }
        Ok(Self {
            min,
            max,
            placeholder: placeholder.into(),
        })
    }

    /// Lower clamp bound, also the fallback for unparsable input.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper clamp bound.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Label text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// Unset or empty variables fall back to their defaults.
///
/// # Errors
///
/// Returns [`NumfieldError::Config`](crate::NumfieldError::Config) if a
/// bound is not an integer or if the minimum exceeds the maximum.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let min = bound_var("NUMFIELD_MIN", DEFAULT_MIN)?;
    let max = bound_var("NUMFIELD_MAX", DEFAULT_MAX)?;
    let placeholder =
        non_empty_var("NUMFIELD_PLACEHOLDER").unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());
    let heading = non_empty_var("NUMFIELD_HEADING").unwrap_or_else(|| DEFAULT_HEADING.to_string());
    let log_file = non_empty_var("NUMFIELD_LOG_FILE").map(PathBuf::from);

    Ok(AppConfig {
        field: FieldConfig::new(min, max, placeholder)?,
        heading,
        log_file,
    })
}

/// Reads an integer bound, falling back to `default` when unset.
fn bound_var(name: &str, default: i64) -> crate::Result<i64> {
    match non_empty_var(name) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            crate::NumfieldError::Config(format!("{name} must be an integer, got {raw:?}: {e}"))
        }),
        None => Ok(default),
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
