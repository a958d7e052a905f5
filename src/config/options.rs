// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::core::sanitize::split_list;
use crate::error::ConfigError;

/// What to watch: date columns and row labels, both in configured order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSpec {
    pub dates: Vec<String>,
    pub rows: Vec<String>,
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            dates: vec![s!(DEFAULT_DATE_LABEL)],
            rows: split_list(DEFAULT_ROWS, LIST_SEP),
        }
    }
}

impl TargetSpec {
    pub fn new<D, R>(dates: D, rows: R) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            dates: dates.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchOptions {
    pub target: TargetSpec,
    pub page_url: String,
    pub notify_url: String,
    token: Option<String>,
    pub timeout: Duration,
    pub always_notify: bool,
    pub state_file: Option<PathBuf>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            target: TargetSpec::default(),
            page_url: s!(PAGE_URL),
            notify_url: s!(LINE_BROADCAST_URL),
            token: None,
            timeout: Duration::from_millis(TIMEOUT_MS),
            always_notify: false,
            state_file: None,
        }
    }
}

impl WatchOptions {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build options from any key lookup. Unset and blank values fall back to defaults;
    /// a list of separators only (`TARGET_ROWS=" , "`) is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut opts = Self::default();

        // Plural wins over singular
        if let Some(v) = get(ENV_DATE_LABELS) {
            opts.target.dates = split_list(&v, LIST_SEP);
        } else if let Some(v) = get(ENV_DATE_LABEL) {
            opts.target.dates = vec![v];
        }
        if opts.target.dates.is_empty() {
            return Err(ConfigError::NoDates);
        }

        if let Some(v) = get(ENV_ROWS) {
            opts.target.rows = split_list(&v, LIST_SEP);
            if opts.target.rows.is_empty() {
                return Err(ConfigError::NoRows);
            }
        }

        opts.token = get(ENV_TOKEN).or_else(|| get(ENV_TOKEN_LEGACY));

        if let Some(v) = get(ENV_TIMEOUT_MS) {
            let ms: u64 = v
                .parse()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::Timeout { value: v })?;
            opts.timeout = Duration::from_millis(ms);
        }

        opts.always_notify = get(ENV_ALWAYS_NOTIFY).is_some_and(|v| is_truthy(&v));
        opts.state_file = get(ENV_STATE_FILE).map(PathBuf::from);

        Ok(opts)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}
