use anyhow::Context;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct Config {
    /// Origin serving `/api/employees`, without a trailing slash.
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::with_base_url(std::env::var("API_BASE_URL").ok())
    }

    pub fn with_base_url(base_url: Option<String>) -> anyhow::Result<Self> {
        let raw = base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let api_base_url = raw.trim().trim_end_matches('/').to_string();

        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            anyhow::bail!("API_BASE_URL must start with http:// or https:// (got {:?})", raw);
        }
        reqwest::Url::parse(&api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: {}", api_base_url))?;

        Ok(Self { api_base_url })
    }
}
