use anyhow::{Context, Result};
use config::{File, Source};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    /// Shared secret checked against the `x-access-token` header.
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Configuration for the OpenAI-compatible chat completion endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default)]
    pub organization_id: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

// environment variable -> config key
const ENV_OVERRIDES: [(&str, &str); 7] = [
    ("OPENAI_API_KEY", "llm.api_key"),
    ("OPENAI_BASE_URL", "llm.base_url"),
    ("OPENAI_MODEL", "llm.model"),
    ("OPENAI_ORGANIZATION", "llm.organization_id"),
    ("TEAM_ACCESS_TOKEN", "access_token"),
    ("HOST", "server.host"),
    ("PORT", "server.port"),
];

impl Config {
    /// Load the optional config file at `path`, then apply environment overrides.
    pub fn load(path: &str) -> Result<Self> {
        Self::build(File::with_name(path).required(false), |key| {
            std::env::var(key).ok()
        })
        .with_context(|| format!("Failed to load configuration from {}", path))
    }

    fn build<S>(file: S, env: impl Fn(&str) -> Option<String>) -> Result<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder().add_source(file);
        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, env(var))?;
        }

        let mut config: Config = builder.build()?.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    // An empty secret disables the gate, same as an unset one.
    fn normalize(&mut self) {
        fn non_empty(value: &mut Option<String>) {
            if value.as_deref().is_some_and(str::is_empty) {
                *value = None;
            }
        }
        non_empty(&mut self.access_token);
        non_empty(&mut self.llm.api_key);
        non_empty(&mut self.llm.organization_id);
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            organization_id: None,
        }
    }
}
