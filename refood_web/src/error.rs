use thiserror::Error;

/// Errors raised while preparing the page. Navigation itself cannot fail.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown log level `{0}`")]
    LogLevel(String),

    #[error("desktop breakpoint must be greater than zero")]
    ZeroBreakpoint,
}
