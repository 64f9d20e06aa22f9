//! Client configuration.
//!
//! The page is normally served by the backend itself, so the API base
//! defaults to the window origin. A host page can override settings with
//! `<meta>` tags:
//!
//! ```html
//! <meta name="matcher-api-base" content="/api/">
//! <meta name="matcher-notice-ttl-ms" content="8000">
//! <meta name="matcher-log" content="resume_matcher_ui=debug">
//! ```

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;
use crate::notify::DEFAULT_NOTICE_TTL;

pub const META_API_BASE: &str = "matcher-api-base";
pub const META_NOTICE_TTL: &str = "matcher-notice-ttl-ms";
pub const META_LOG: &str = "matcher-log";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base: Url,
    pub notice_ttl: Duration,
    pub log_filter: String,
}

impl ClientConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            notice_ttl: DEFAULT_NOTICE_TTL,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    /// Resolve settings against `origin`, reading overrides through `lookup`.
    /// Blank overrides are ignored.
    pub fn resolve<F>(origin: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin = parse_base(origin, None)?;
        let setting = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base = match setting(META_API_BASE) {
            Some(value) => parse_base(&value, Some(&origin))?,
            None => origin,
        };

        let mut config = Self::new(api_base);

        if let Some(value) = setting(META_NOTICE_TTL) {
            let millis: u64 = value
                .parse()
                .map_err(|_| ConfigError::NoticeTtl(value.clone()))?;
            config.notice_ttl = Duration::from_millis(millis);
        }

        if let Some(value) = setting(META_LOG) {
            config.log_filter = value;
        }

        Ok(config)
    }

    /// Defaults only, rooted at the window origin.
    pub fn from_window_origin() -> Result<Self, ConfigError> {
        Self::resolve(&window_origin()?, |_| None)
    }

    /// Read the configuration from the current document.
    pub fn from_document() -> Result<Self, ConfigError> {
        let origin = window_origin()?;
        let document = web_sys::window().and_then(|w| w.document());

        Self::resolve(&origin, |name| {
            let document = document.as_ref()?;
            let selector = format!("meta[name=\"{}\"]", name);
            document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
        })
    }
}

fn window_origin() -> Result<String, ConfigError> {
    web_sys::window()
        .ok_or(ConfigError::NoWindow)?
        .location()
        .origin()
        .map_err(|_| ConfigError::NoWindow)
}

/// Parse an absolute URL, or one relative to `origin`.
fn parse_base(value: &str, origin: Option<&Url>) -> Result<Url, ConfigError> {
    let parsed = match origin {
        Some(origin) => origin.join(value),
        None => Url::parse(value),
    };
    parsed.map_err(|source| ConfigError::ApiBase {
        value: value.to_string(),
        source,
    })
}
