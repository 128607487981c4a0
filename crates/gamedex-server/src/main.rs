use tracing_subscriber::EnvFilter;

use gamedex_server::build_app;
use gamedex_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::load();
    config.validate();
    let listen_addr = config.listen_addr.clone();

    let (app, _state) = build_app(config);

    let listener = match tokio::net::TcpListener::bind(&listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {listen_addr}: {e}");
            std::process::exit(1);
        },
    };

    tracing::info!("server running on {listen_addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
