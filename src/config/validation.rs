use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_sitemap_url(&config.sitemap_url)?;
    validate_timing(config)?;
    validate_output(config)?;
    validate_user_agent(&config.user_agent)?;
    Ok(())
}

fn validate_sitemap_url(sitemap_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(sitemap_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid sitemap_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "sitemap_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

fn validate_timing(config: &Config) -> Result<(), ConfigError> {
    // politeness_delay_ms = 0 is allowed; it disables the pause
    if config.page_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "page_timeout_secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<(), ConfigError> {
    if config.output_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output_path cannot be empty".to_string(),
        ));
    }

    if config.output_path.file_name().is_none() {
        return Err(ConfigError::Validation(format!(
            "output_path must name a file, got '{}'",
            config.output_path.display()
        )));
    }

    Ok(())
}

fn validate_user_agent(user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
