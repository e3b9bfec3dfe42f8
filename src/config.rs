use log::warn;

pub const PLACEHOLDER_BACKEND_URL: &str = "https://placeholder.backend.local";
pub const PLACEHOLDER_BACKEND_KEY: &str = "placeholder-anon-key";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REVALIDATE_SECONDS: u64 = 60;

/// Connection settings for the hosted content backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_BACKEND_URL || self.anon_key == PLACEHOLDER_BACKEND_KEY
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::from(PLACEHOLDER_BACKEND_URL),
            anon_key: String::from(PLACEHOLDER_BACKEND_KEY),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_name: String,
    pub host: String,
    pub port: u16,
    pub content_path: String,
    pub static_dir: String,
    pub revalidate_seconds: u64,
    /// Shared secret for on-demand revalidation; the endpoint is off when unset.
    pub revalidate_token: Option<String>,
    pub backend: BackendConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: String::from("About"),
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            content_path: String::from("./data/about.json"),
            static_dir: String::from("./static"),
            revalidate_seconds: DEFAULT_REVALIDATE_SECONDS,
            revalidate_token: None,
            backend: BackendConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Reads the process environment; `.env` must already be loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Missing or
    /// unparsable values fall back to the defaults, never to an error.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let revalidate_seconds = match lookup("REVALIDATE_SECONDS") {
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!(
                    "REVALIDATE_SECONDS '{}' is not a number, using {}",
                    raw, DEFAULT_REVALIDATE_SECONDS
                );
                DEFAULT_REVALIDATE_SECONDS
            }),
            None => defaults.revalidate_seconds,
        };

        let backend_url = lookup("BACKEND_URL").filter(|v| !v.is_empty());
        let backend_key = lookup("BACKEND_ANON_KEY").filter(|v| !v.is_empty());
        if backend_url.is_none() || backend_key.is_none() {
            warn!("Backend credentials missing, falling back to placeholder values");
        }

        Self {
            site_name: lookup("SITE_NAME").unwrap_or(defaults.site_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            content_path: lookup("CONTENT_PATH").unwrap_or(defaults.content_path),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            revalidate_seconds,
            revalidate_token: lookup("REVALIDATE_TOKEN").filter(|v| !v.is_empty()),
            backend: BackendConfig {
                url: backend_url.unwrap_or(defaults.backend.url),
                anon_key: backend_key.unwrap_or(defaults.backend.anon_key),
            },
        }
    }
}
