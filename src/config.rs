use crate::constants::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Primary API base, e.g. `http://localhost:5000/api`
    pub api_base_url: String,
    /// URL templates tried in order; `{base}` and `{path}` are substituted
    pub endpoint_templates: Vec<String>,
    /// `limit` sent with collection requests
    pub fetch_limit: u32,
    pub api_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            endpoint_templates: DEFAULT_ENDPOINT_TEMPLATES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            api_token: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or blank keys
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(base) = get(ENV_API_BASE_URL) {
            config.api_base_url = base.trim().trim_end_matches('/').to_string();
        }

        if let Some(templates) = get(ENV_ENDPOINT_TEMPLATES) {
            config.endpoint_templates = templates
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            if config.endpoint_templates.is_empty() {
                return Err(ConfigError::InvalidTemplate(templates));
            }
        }

        if let Some(limit) = get(ENV_FETCH_LIMIT) {
            config.fetch_limit = limit
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|l| *l > 0)
                .ok_or(ConfigError::InvalidFetchLimit(limit))?;
        }

        config.api_token = get(ENV_API_TOKEN);

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone()));
        }
        if let Some(bad) = self
            .endpoint_templates
            .iter()
            .find(|t| !t.contains("{path}"))
        {
            return Err(ConfigError::InvalidTemplate(bad.clone()));
        }
        Ok(())
    }
}
