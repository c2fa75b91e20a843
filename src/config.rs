//! Card configuration parsed from environment variables.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable selecting the class vocabulary.
pub const CLASS_SCHEME_ENV: &str = "REPORT_CARD_CLASS_SCHEME";

/// Error returned by [`CardConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown REPORT_CARD_CLASS_SCHEME: {0} (expected 'semantic' or 'bootstrap')")]
    UnknownClassScheme(String),
}

/// Vocabulary used when card flags are rendered into CSS class names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassScheme {
    /// `card-base`, `border-draft`, `muted`, ...
    #[default]
    Semantic,
    /// Odoo/Bootstrap names: `o_kanban_card`, `border-primary`, `text-muted`, ...
    Bootstrap,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardConfig {
    pub class_scheme: ClassScheme,
}

impl CardConfig {
    /// Build typed card config from environment variables.
    ///
    /// Optional:
    /// - `REPORT_CARD_CLASS_SCHEME`: `semantic` (default) or `bootstrap`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownClassScheme`] for an unrecognized scheme.
    pub fn from_env() -> Result<Self, ConfigError> {
        let class_scheme = parse_class_scheme(std::env::var(CLASS_SCHEME_ENV).ok().as_deref())?;
        Ok(Self { class_scheme })
    }
}

/// Parse a class scheme name; `None` and blank values select the default.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownClassScheme`] for anything else.
pub fn parse_class_scheme(raw: Option<&str>) -> Result<ClassScheme, ConfigError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(ClassScheme::default()),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "semantic" => Ok(ClassScheme::Semantic),
            "bootstrap" => Ok(ClassScheme::Bootstrap),
            _ => Err(ConfigError::UnknownClassScheme(value.to_owned())),
        },
    }
}
