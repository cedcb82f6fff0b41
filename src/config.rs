//! Server configuration from environment variables.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Where to listen and what to serve under `/static`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `STATIC_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty values use the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => match raw.trim().parse() {
                Ok(port) => port,
                Err(_) => {
                    log::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                    defaults.port
                }
            },
            None => defaults.port,
        };

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR").unwrap_or(defaults.static_dir),
        }
    }
}
