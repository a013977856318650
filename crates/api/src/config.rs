use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables. Configuration is
/// read once at process start; there is no hot-reload.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// External chatbot service configuration.
    pub chatbot: ChatbotConfig,
}

/// Configuration for the external chat/autofill service.
#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    /// Base URL of the chatbot service (default: `http://localhost:8000`).
    pub base_url: String,
    /// Timeout for chat requests in seconds (default: `30`).
    pub chat_timeout_secs: u64,
    /// Timeout for autofill requests in seconds (default: `60`).
    pub autofill_timeout_secs: u64,
    /// Timeout for upstream health probes in seconds (default: `5`).
    pub health_timeout_secs: u64,
}

impl ChatbotConfig {
    /// Load chatbot configuration from environment variables.
    ///
    /// | Env Var                        | Default                 |
    /// |--------------------------------|-------------------------|
    /// | `CHATBOT_BASE_URL`             | `http://localhost:8000` |
    /// | `CHATBOT_CHAT_TIMEOUT_SECS`    | `30`                    |
    /// | `CHATBOT_AUTOFILL_TIMEOUT_SECS`| `60`                    |
    /// | `CHATBOT_HEALTH_TIMEOUT_SECS`  | `5`                     |
    pub fn from_env() -> Self {
        let base_url = std::env::var("CHATBOT_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".into());

        let chat_timeout_secs: u64 = std::env::var("CHATBOT_CHAT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("CHATBOT_CHAT_TIMEOUT_SECS must be a valid u64");

        let autofill_timeout_secs: u64 = std::env::var("CHATBOT_AUTOFILL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("CHATBOT_AUTOFILL_TIMEOUT_SECS must be a valid u64");

        let health_timeout_secs: u64 = std::env::var("CHATBOT_HEALTH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("CHATBOT_HEALTH_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            chat_timeout_secs,
            autofill_timeout_secs,
            health_timeout_secs,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let chatbot = ChatbotConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            chatbot,
        }
    }
}
