//! Locations of the ship schedule backend and helpers for talking to it:
//! resolving API and media URLs, and building bearer-token headers.

mod config;
pub mod defaults;
mod error;
mod headers;
mod macros;
mod urls;

pub use config::{ApiConfig, AuthEndpoints};
pub use error::{ConfigError, ConfigResult};
pub use headers::{get_auth_headers, get_upload_headers, RequestHeaders};
pub use urls::{build_api_url, build_media_url};
