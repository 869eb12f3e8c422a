use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_base_url: String,
    pub openai_model: String,
    pub gateway_timeout_secs: u64,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "set_openai_api_key".to_string()),
            ),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            gateway_timeout_secs: env::var("GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret() == "set_openai_api_key" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }

        if self.gateway_timeout_secs == 0 {
            panic!("FATAL: GATEWAY_TIMEOUT_SECS must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            gateway_timeout_secs: 5,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
