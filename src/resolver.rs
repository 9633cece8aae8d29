use crate::config::Config;

/// Expands a resource path into the ordered list of candidate URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointResolver {
    base_url: String,
    templates: Vec<String>,
}

impl EndpointResolver {
    pub fn new(base_url: impl Into<String>, templates: Vec<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            templates,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_base_url.clone(),
            config.endpoint_templates.clone(),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Candidate URLs for `path` (e.g. `rewards/12` or `rewards?limit=10`),
    /// in template order with duplicates removed.
    pub fn candidates(&self, path: &str) -> Vec<String> {
        let path = path.trim_start_matches('/');
        let mut urls: Vec<String> = Vec::with_capacity(self.templates.len());
        for template in &self.templates {
            let url = template
                .replace("{base}", &self.base_url)
                .replace("{path}", path);
            if !urls.contains(&url) {
                urls.push(url);
            }
        }
        urls
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
