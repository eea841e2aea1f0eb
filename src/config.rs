//! Client configuration baked in at build time.
//!
//! The browser has no process environment, so values come from `option_env!`
//! at compile time and are parsed by [`AppConfig::from_vars`]. Invalid values
//! are reported as [`ConfigError`]; the app falls back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::namespace::{self, Namespace};

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@nhau.app";
pub const DEFAULT_STORAGE_KEY: &str = "nhau_user";
pub const DEFAULT_NAMESPACES: &str = "/:nhau_user,/v2:nhau_v2_user";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid NHAU_NAMESPACES entry: {0:?}")]
    InvalidNamespaces(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the auth/data service, without a trailing slash.
    pub api_base: String,
    /// Email of the account confined to the admin area. `None` disables the sentinel.
    pub admin_email: Option<String>,
    /// Session namespaces, one per deployment sharing this origin.
    pub namespaces: Vec<Namespace>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            admin_email: Some(DEFAULT_ADMIN_EMAIL.to_owned()),
            namespaces: vec![Namespace::new("", DEFAULT_STORAGE_KEY), Namespace::new("/v2", "nhau_v2_user")],
        }
    }
}

impl AppConfig {
    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `NHAU_API_BASE`: default `/api`
    /// - `NHAU_ADMIN_EMAIL`: default `admin@nhau.app`, empty disables
    /// - `NHAU_NAMESPACES`: `prefix:storage_key` pairs separated by commas
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("NHAU_API_BASE"),
            option_env!("NHAU_ADMIN_EMAIL"),
            option_env!("NHAU_NAMESPACES"),
        )
    }

    /// Build config from raw variable values; `None` selects the default.
    pub fn from_vars(
        api_base: Option<&str>,
        admin_email: Option<&str>,
        namespaces: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base = api_base
            .unwrap_or(DEFAULT_API_BASE)
            .trim()
            .trim_end_matches('/')
            .to_owned();
        let admin_email = match admin_email.map(str::trim) {
            None => Some(DEFAULT_ADMIN_EMAIL.to_owned()),
            Some("") => None,
            Some(email) => Some(email.to_owned()),
        };
        let namespaces = parse_namespaces(namespaces.unwrap_or(DEFAULT_NAMESPACES))?;
        Ok(Self { api_base, admin_email, namespaces })
    }

    /// Namespace owning `path`; the root namespace when nothing more specific matches.
    pub fn namespace_for(&self, path: &str) -> Namespace {
        namespace::resolve(&self.namespaces, path)
            .cloned()
            .unwrap_or_else(|| Namespace::new("", DEFAULT_STORAGE_KEY))
    }

    /// Load config, logging and falling back to defaults on error.
    pub fn load() -> Self {
        Self::from_build_env().unwrap_or_else(|e| {
            leptos::logging::warn!("config: {e}; using defaults");
            Self::default()
        })
    }
}

fn parse_namespaces(raw: &str) -> Result<Vec<Namespace>, ConfigError> {
    let mut out: Vec<Namespace> = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((prefix, key)) = entry.split_once(':') else {
            return Err(ConfigError::InvalidNamespaces(entry.to_owned()));
        };
        let prefix = normalize_prefix(prefix.trim());
        let key = key.trim();
        if key.is_empty() || (!prefix.is_empty() && !prefix.starts_with('/')) {
            return Err(ConfigError::InvalidNamespaces(entry.to_owned()));
        }
        if out.iter().any(|ns| ns.prefix == prefix || ns.storage_key == key) {
            return Err(ConfigError::InvalidNamespaces(entry.to_owned()));
        }
        out.push(Namespace::new(&prefix, key));
    }
    if !out.iter().any(|ns| ns.prefix.is_empty()) {
        return Err(ConfigError::InvalidNamespaces("missing root namespace `/`".to_owned()));
    }
    Ok(out)
}

/// `/` and `/v2/` become `` and `/v2`.
fn normalize_prefix(prefix: &str) -> String {
    prefix.trim_end_matches('/').to_owned()
}
