use serde::{Deserialize, Serialize};

use self::api::ApiConfig;

pub mod api;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
        }
    }
}
