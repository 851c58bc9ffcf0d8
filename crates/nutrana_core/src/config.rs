//! Deployment-level display defaults.
//!
//! # Responsibility
//! - Hold fallback identity values used when a principal lacks them.
//! - Resolve overrides from environment variables.
//!
//! # Invariants
//! - Blank override values are ignored; built-in defaults stay in effect.

use serde::{Deserialize, Serialize};

/// Env var overriding the fallback display name.
pub const DISPLAY_NAME_ENV: &str = "NUTRANA_DEFAULT_DISPLAY_NAME";
/// Env var overriding the fallback avatar reference.
pub const AVATAR_URL_ENV: &str = "NUTRANA_DEFAULT_AVATAR_URL";

pub const DEFAULT_DISPLAY_NAME: &str = "Usuário";
pub const DEFAULT_AVATAR_URL: &str = "/ModeloHome.png";

/// Fallback identity values applied by the session gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDefaults {
    pub display_name: String,
    pub avatar_url: String,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        }
    }
}

impl DisplayDefaults {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, keyed by env var name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut defaults = Self::default();
        if let Some(value) = non_blank(lookup(DISPLAY_NAME_ENV)) {
            defaults.display_name = value;
        }
        if let Some(value) = non_blank(lookup(AVATAR_URL_ENV)) {
            defaults.avatar_url = value;
        }
        defaults
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
