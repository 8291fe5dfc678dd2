use const_format::concatcp;

pub const BASE_URL: &str = "http://localhost:8000";

pub const API_URL: &str = concatcp!(BASE_URL, "/", API_PATH);
pub const MEDIA_URL: &str = concatcp!(BASE_URL, "/", MEDIA_PATH);

pub const LOGIN_URL: &str = concatcp!(API_URL, LOGIN_PATH);
pub const REGISTER_URL: &str = concatcp!(API_URL, REGISTER_PATH);
pub const ME_URL: &str = concatcp!(API_URL, ME_PATH);
pub const AVATAR_URL: &str = concatcp!(API_URL, AVATAR_PATH);

// Path suffixes, shared with the runtime config so both stay in sync
pub(crate) const API_PATH: &str = "api/";
pub(crate) const MEDIA_PATH: &str = "media/";

pub(crate) const LOGIN_PATH: &str = "auth/login/";
pub(crate) const REGISTER_PATH: &str = "auth/register/";
pub(crate) const LOGOUT_PATH: &str = "auth/logout/";
pub(crate) const TOKEN_REFRESH_PATH: &str = "auth/token/refresh/";
pub(crate) const ME_PATH: &str = "auth/me/";
pub(crate) const AVATAR_PATH: &str = "auth/me/avatar/";
pub(crate) const PERMISSIONS_PATH: &str = "auth/me/permissions/";

/// Environment variable overriding [`BASE_URL`] at runtime.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn derived_constants_match_the_documented_table() {
        assert_eq!(API_URL, "http://localhost:8000/api/");
        assert_eq!(MEDIA_URL, "http://localhost:8000/media/");
        assert_eq!(LOGIN_URL, "http://localhost:8000/api/auth/login/");
        assert_eq!(REGISTER_URL, "http://localhost:8000/api/auth/register/");
        assert_eq!(ME_URL, "http://localhost:8000/api/auth/me/");
        assert_eq!(AVATAR_URL, "http://localhost:8000/api/auth/me/avatar/");
    }
}
