pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_INBOX_REFRESH_MS: u32 = 300_000;

pub const BASE_URL_VAR: &str = "STUDENT_HUB_BASE_URL";
pub const REFRESH_MS_VAR: &str = "STUDENT_HUB_REFRESH_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubConfig {
    /// Scheme and host of the hub backend, without a trailing slash.
    pub base_url: String,
    pub inbox_refresh_ms: u32,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            inbox_refresh_ms: DEFAULT_INBOX_REFRESH_MS,
        }
    }
}

impl HubConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim()),
            _ => Self::default(),
        };
        if let Some(raw) = lookup(REFRESH_MS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(ms) if ms > 0 => config.inbox_refresh_ms = ms,
                _ => log::warn!(
                    "Ignoring {}={:?}, using {} ms",
                    REFRESH_MS_VAR,
                    raw,
                    DEFAULT_INBOX_REFRESH_MS
                ),
            }
        }
        config
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
