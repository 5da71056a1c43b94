use std::sync::Arc;
use nb_core::PostedStore;

pub struct AppState {
    pub store: Arc<dyn PostedStore>,
    pub sources: Vec<String>,
}
