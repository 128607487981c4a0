use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::game_store::GameStore;

pub type SharedGameStore = Arc<RwLock<GameStore>>;

/// Shared application state, constructed once at startup and cloned into
/// each handler. The store's write guard is the single critical section
/// serializing mutations under the multi-threaded runtime.
#[derive(Clone)]
pub struct AppState {
    pub games: SharedGameStore,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            games: Arc::new(RwLock::new(GameStore::new())),
            config: Arc::new(config),
        }
    }
}
