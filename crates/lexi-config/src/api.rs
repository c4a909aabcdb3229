use std::env;

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2";

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiConfig {
    /// Dictionary service base URL; lookups go to `{base_url}/entries/en/{word}`
    pub base_url: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("LEXI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
