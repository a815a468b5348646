//! Engine configuration read from the environment.

/// Runtime configuration. Every field has a default so an empty
/// environment starts a local server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub character_db: String,
    pub reference_data_path: String,
    /// Report `Failed` instead of `Success` when a character insert is rejected.
    pub strict_create_outcome: bool,
    pub cors_allowed_origins: Option<String>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|port| port.parse().ok())
            .unwrap_or(3000);

        let strict_create_outcome = lookup("STRICT_CREATE_OUTCOME")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            server_port,
            character_db: lookup("CHARACTER_DB").unwrap_or_else(|| "characters.db".into()),
            reference_data_path: lookup("REFERENCE_DATA_PATH")
                .unwrap_or_else(|| "data/reference_data.json".into()),
            strict_create_outcome,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
