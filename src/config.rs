// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Runtime configuration read from environment variables.

use anyhow::{Context, Result, bail};
use url::Url;

/// Base URL of the notes backend.
pub const API_URL_VAR: &str = "NOTEFOLD_API_URL";
/// Deployment label, e.g. `development` or `production`.
pub const ENVIRONMENT_VAR: &str = "NOTEFOLD_ENV";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Settings resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Validated and reported at startup; no command talks to the backend.
    pub api_base_url: Option<Url>,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error when the API URL is not an absolute `http`/`https` URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_base_url = match read(API_URL_VAR) {
            Some(raw) => Some(parse_api_url(&raw)?),
            None => None,
        };
        let environment = read(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            api_base_url,
            environment,
        })
    }

    /// Emit the resolved settings so startup problems are visible in the log.
    pub fn log_summary(&self) {
        match &self.api_base_url {
            Some(url) => tracing::info!(environment = %self.environment, api_url = %url, "configuration loaded"),
            None => tracing::info!(environment = %self.environment, "configuration loaded; {API_URL_VAR} not set"),
        }
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid {API_URL_VAR}: {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        bail!("{API_URL_VAR} must be an http/https URL with a host, got {raw:?}");
    }
    Ok(url)
}
