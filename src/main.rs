use api_config::{get_auth_headers, get_upload_headers, ApiConfig};

const USAGE: &str = "usage: api-config [config | api <endpoint> | media <path> | headers <auth|upload> <token>]";

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn render(config: &ApiConfig, args: &[&str]) -> CliResult<Option<String>> {
    let output = match args {
        [] | ["config"] => Some(serde_json::to_string_pretty(config)?),
        ["api", endpoint] => Some(config.api_url_for(endpoint)),
        ["media", path] => config.media_url_for(Some(*path)),
        ["headers", "auth", token] => Some(serde_json::to_string_pretty(&get_auth_headers(token))?),
        ["headers", "upload", token] => {
            Some(serde_json::to_string_pretty(&get_upload_headers(token))?)
        }
        _ => return Err(USAGE.into()),
    };

    Ok(output)
}

fn main() -> CliResult<()> {
    env_logger::init();

    let config = ApiConfig::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match render(&config, &args)? {
        Some(output) => println!("{output}"),
        None => log::info!("Empty media path, nothing to resolve"),
    }

    Ok(())
}
