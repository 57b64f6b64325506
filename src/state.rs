use std::sync::Arc;
use tracing::warn;

use crate::config::Config;
use crate::stateless_llm::{OpenAICompatibleLLM, StatelessLLMInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn StatelessLLMInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        if config.llm.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; translation requests will fail");
        }
        if config.access_token.is_none() {
            warn!("TEAM_ACCESS_TOKEN is not set; /api/translate is open to everyone");
        }

        let llm = Arc::new(OpenAICompatibleLLM::from_config(&config.llm));
        Self::with_llm(config, llm)
    }

    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
        }
    }
}
