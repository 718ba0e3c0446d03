//! Site configuration.
//!
//! `site.toml` is embedded at compile time; a broken file degrades to the
//! defaults instead of blanking the page.

use serde::Deserialize;
use std::str::FromStr;

use crate::error::SiteError;
use crate::nav::Breakpoint;

/// The `site.toml` shipped with the bundle.
pub const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: BrandConfig,
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

/// Brand mark and contact details
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Highlighted part of the wordmark ("Re").
    pub accent: String,
    /// Plain part of the wordmark ("Food").
    pub name: String,
    pub contact_email: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            accent: "Re".into(),
            name: "Food".into(),
            contact_email: "hello@refood.org".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewport width in CSS pixels where the desktop navbar takes over.
    pub desktop_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: Breakpoint::DESKTOP.px(),
        }
    }
}

impl LayoutConfig {
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.desktop_breakpoint)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl LoggingConfig {
    /// Parsed max level, `INFO` when the configured value is unknown.
    pub fn max_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.level).unwrap_or(tracing::Level::INFO)
    }
}

impl SiteConfig {
    /// Parse and validate a `site.toml` document.
    pub fn from_toml(content: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded config, returning the defaults alongside the
    /// error when it does not parse. Logging is not up yet at this point,
    /// so reporting is left to the caller.
    pub fn load_embedded() -> (Self, Option<SiteError>) {
        match Self::from_toml(EMBEDDED_SITE_TOML) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        if tracing::Level::from_str(&self.logging.level).is_err() {
            return Err(SiteError::LogLevel(self.logging.level.clone()));
        }
        if self.layout.desktop_breakpoint == 0 {
            return Err(SiteError::ZeroBreakpoint);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_is_valid() {
        let (config, err) = SiteConfig::load_embedded();
        assert!(err.is_none(), "embedded site.toml rejected: {err:?}");
        assert_eq!(config.layout.breakpoint(), Breakpoint::DESKTOP);
        assert_eq!(config.brand.accent, "Re");
        assert_eq!(config.brand.name, "Food");
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = SiteConfig::from_toml("").expect("empty config");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = SiteConfig::from_toml(
            r#"
[layout]
desktop_breakpoint = 1024
"#,
        )
        .expect("partial config");
        assert_eq!(config.layout.breakpoint(), Breakpoint::new(1024));
        assert_eq!(config.brand, BrandConfig::default());
        assert_eq!(config.logging.max_level(), tracing::Level::INFO);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = SiteConfig::from_toml("[logging]\nlevel = \"DEBUG\"\n").expect("config");
        assert_eq!(config.logging.max_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = SiteConfig::from_toml("[logging]\nlevel = \"chatty\"\n").unwrap_err();
        assert!(matches!(err, SiteError::LogLevel(ref level) if level == "chatty"));
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let err = SiteConfig::from_toml("[layout]\ndesktop_breakpoint = 0\n").unwrap_err();
        assert!(matches!(err, SiteError::ZeroBreakpoint));
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = SiteConfig::from_toml("[brand\naccent = ").unwrap_err();
        assert!(matches!(err, SiteError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site config"));
    }
}
