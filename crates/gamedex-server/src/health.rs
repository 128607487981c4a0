use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Structured health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub games: CatalogInfo,
}

#[derive(Serialize)]
pub struct CatalogInfo {
    pub stored: usize,
}

/// Structured health check endpoint. Returns server status and catalog size
/// as JSON.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stored = state.games.read().await.len();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        games: CatalogInfo { stored },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "healthy",
            version: "0.1.0",
            games: CatalogInfo { stored: 5 },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"healthy\""));
        assert!(json.contains("\"stored\":5"));
    }
}
