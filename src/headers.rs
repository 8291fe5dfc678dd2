use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{ConfigError, ConfigResult};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Header {
    Authorization,
    ContentType,
}

impl Header {
    fn name(self) -> &'static str {
        match self {
            Header::Authorization => "Authorization",
            Header::ContentType => "Content-Type",
        }
    }

    fn header_name(self) -> HeaderName {
        match self {
            Header::Authorization => AUTHORIZATION,
            Header::ContentType => CONTENT_TYPE,
        }
    }
}

/// Headers to send with a request to the backend, keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: BTreeMap<Header, String>,
}

impl RequestHeaders {
    fn bearer(token: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(Header::Authorization, format!("Bearer {token}"));
        Self { entries }
    }

    fn with(mut self, header: Header, value: &str) -> Self {
        self.entries.insert(header, value.to_string());
        self
    }

    /// Header names compare case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(header, value)| (header.name(), value.as_str()))
    }

    /// Fails when the token holds bytes not allowed in a header value.
    pub fn to_header_map(&self) -> ConfigResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());

        for (header, value) in &self.entries {
            let mut value = HeaderValue::from_str(value).map_err(|source| {
                ConfigError::InvalidHeaderValue {
                    name: header.name(),
                    source,
                }
            })?;
            if *header == Header::Authorization {
                value.set_sensitive(true);
            }
            map.insert(header.header_name(), value);
        }

        Ok(map)
    }

    /// Attaches these headers to a request the caller is building.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> ConfigResult<reqwest::RequestBuilder> {
        Ok(request.headers(self.to_header_map()?))
    }
}

impl Serialize for RequestHeaders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Headers for an authenticated JSON request.
pub fn get_auth_headers(token: &str) -> RequestHeaders {
    RequestHeaders::bearer(token).with(Header::ContentType, JSON_CONTENT_TYPE)
}

/// No `Content-Type`, so the multipart body can set its own boundary.
pub fn get_upload_headers(token: &str) -> RequestHeaders {
    RequestHeaders::bearer(token)
}
