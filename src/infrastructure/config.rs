use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub history_enabled: bool,
    /// Maximum number of retained history entries, unbounded when `None`
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 7071,
            cors_allowed_origins: Vec::new(),
            history_enabled: true,
            history_limit: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            history_enabled: env::var("HISTORY_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.history_enabled),
            history_limit: env::var("HISTORY_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .filter(|&l| l > 0),
        }
    }
}
