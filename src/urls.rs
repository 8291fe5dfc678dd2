use crate::ApiConfig;

const ABSOLUTE_PREFIX: &str = "http";
const MEDIA_SEGMENT: &str = "media/";

fn strip_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Resolves a backend media path such as `/media/user_avatars/1/avatar_1.png`.
pub fn build_media_url(config: &ApiConfig, relative_path: Option<&str>) -> Option<String> {
    let path = relative_path.filter(|path| !path.is_empty())?;

    if path.starts_with(ABSOLUTE_PREFIX) {
        return Some(path.to_string());
    }

    let path = strip_leading_slash(path);
    if path.starts_with(MEDIA_SEGMENT) {
        Some(format!("{}/{path}", config.base_url()))
    } else {
        Some(format!("{}{path}", config.media_url()))
    }
}

/// Resolves an endpoint such as `auth/login/`; `""` gives the API root.
pub fn build_api_url(config: &ApiConfig, endpoint: &str) -> String {
    if endpoint.starts_with(ABSOLUTE_PREFIX) {
        return endpoint.to_string();
    }

    format!("{}{}", config.api_url(), strip_leading_slash(endpoint))
}
