// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::services::generator::GeneratorClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub generator: GeneratorClient,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            generator: GeneratorClient::new(config)?,
        })
    }
}
