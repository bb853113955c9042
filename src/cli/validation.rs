use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(count) = args.count {
        if count == 0 || count > 100 {
            return Err("invalid --count, expected a value between 1 and 100".to_string());
        }
    }
    if let Some(nat) = args.nationality.as_deref() {
        if nat.len() != 2 || !nat.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "invalid --nat '{nat}', expected a two-letter code like US or GB"
            ));
        }
    }
    if let Some(endpoint) = args.endpoint.as_deref() {
        reqwest::Url::parse(endpoint)
            .map_err(|e| format!("invalid --endpoint '{endpoint}': {e}"))?;
    }
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid --timeout, expected a positive number of seconds".to_string());
        }
    }
    Ok(())
}
