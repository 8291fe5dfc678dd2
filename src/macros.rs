macro_rules! log_error_location {
    ($($arg:tt)+) => {
        let msg = format!($($arg)+);
        log::error!("({}:{}) {}", line!(), column!(), msg);
    };
}

macro_rules! log_debug_location {
    ($($arg:tt)+) => {
        let msg = format!($($arg)+);
        log::debug!("({}:{}) {}", line!(), column!(), msg);
    };
}

macro_rules! parse_url {
    ($url:expr) => {
        match url::Url::parse($url) {
            Ok(val) => Ok(val),
            Err(err) => {
                log_error_location!("URL Parse Error for '{}': {}", $url, err);
                Err(crate::error::ConfigError::from(err))
            }
        }
    };
}

pub(crate) use {log_debug_location, log_error_location, parse_url};
