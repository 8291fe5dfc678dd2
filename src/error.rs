use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("base URL '{0}' must not carry a query, fragment or credentials")]
    UnexpectedUrlParts(String),
    #[error("header '{name}' has a value that cannot be sent over HTTP")]
    InvalidHeaderValue {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },
}
