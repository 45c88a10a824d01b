pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openai_service;
pub mod services;
pub mod store;
pub mod youtube_service;

use crate::config::Config;
use crate::store::MemStore;

pub struct AppState {
    pub store: MemStore,
    pub config: Config,
    pub http_client: reqwest::Client,
}
