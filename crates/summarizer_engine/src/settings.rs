use std::time::Duration;

use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: Url,
    /// `None` leaves connection setup unbounded.
    pub connect_timeout: Option<Duration>,
    /// `None` lets a request run until the service answers.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl ClientSettings {
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// `<base>/summarize`, keeping any path prefix on the base.
    pub fn summarize_url(&self) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/summarize"))
    }
}
