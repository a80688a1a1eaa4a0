//! Supabase project configuration resolved at build time.
//!
//! The client is a static WASM bundle, so there is no runtime environment to
//! read; `SUPABASE_URL` and `SUPABASE_ANON_KEY` are baked in by the build
//! (trunk forwards the shell environment to cargo). Everything after the
//! `option_env!` read is pure and tested through [`SupabaseConfig::from_parts`].

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0} at build time")]
    MissingVar(&'static str),
}

/// Connection coordinates for the Supabase project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub project_url: String,
    /// Public anon key, sent as both `apikey` and the default bearer.
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Build config from the values baked in at compile time.
    ///
    /// Required:
    /// - `SUPABASE_URL`: project base, e.g. `https://abc.supabase.co`
    /// - `SUPABASE_ANON_KEY`: the project's public anon key
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Validate and normalize raw config values.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url.map(str::trim).filter(|u| !u.is_empty());
        let anon_key = anon_key.map(str::trim).filter(|k| !k.is_empty());
        let Some(url) = url else {
            return Err(ConfigError::MissingVar("SUPABASE_URL"));
        };
        let Some(anon_key) = anon_key else {
            return Err(ConfigError::MissingVar("SUPABASE_ANON_KEY"));
        };
        Ok(Self {
            project_url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        })
    }

    /// URL under the GoTrue auth API, e.g. `auth_url("/token")`.
    pub fn auth_url(&self, suffix: &str) -> String {
        format!("{}/auth/v1{suffix}", self.project_url)
    }

    /// URL under the PostgREST data API, e.g. `rest_url("/profiles")`.
    pub fn rest_url(&self, suffix: &str) -> String {
        format!("{}/rest/v1{suffix}", self.project_url)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
