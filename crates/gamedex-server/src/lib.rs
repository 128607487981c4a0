pub mod api;
pub mod config;
pub mod error;
pub mod game_store;
pub mod health;
pub mod state;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

use config::ServerConfig;
use state::AppState;

/// Build the Axum router and application state from a config.
pub fn build_app(config: ServerConfig) -> (Router<()>, AppState) {
    let web_root = config.web_root.clone();
    let state = AppState::new(config);

    // Registration order does not matter: the static /games/filter segment
    // takes precedence over the /games/{id} capture.
    let api_routes = Router::new()
        .route("/games", get(api::list_games).post(api::create_game))
        .route("/games/filter", get(api::filter_games))
        .route(
            "/games/{id}",
            get(api::get_game)
                .put(api::update_game)
                .delete(api::delete_game),
        );

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new(&web_root))
        .with_state(state.clone());

    (app, state)
}
