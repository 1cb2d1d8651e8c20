use crate::api::ApiClient;
use crate::models::UiState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub ui: Arc<Mutex<UiState>>,
}

impl AppState {
    pub fn new(api: ApiClient, ui: UiState) -> Self {
        Self {
            api,
            ui: Arc::new(Mutex::new(ui)),
        }
    }
}
