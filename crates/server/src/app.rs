use std::future::Future;

use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes;

/// Every endpoint, with the store handed to handlers as an extension.
pub fn router(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Saved games
        .route("/save_game", post(routes::saved_games::save_game))
        .route("/get_saved_games", get(routes::saved_games::get_saved_games))
        .route("/load_game/{game_id}", get(routes::saved_games::load_game))
        .route(
            "/delete_saved_game/{game_id}",
            delete(routes::saved_games::delete_saved_game),
        )
        // History
        .route("/add_to_history", post(routes::history::add_to_history))
        .route("/get_game_history", get(routes::history::get_game_history))
        .route(
            "/delete_history_item/{history_id}",
            delete(routes::history::delete_history_item),
        )
        .layer(Extension(pool))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}

/// Serve the router on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, pool: SqlitePool, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(pool))
        .with_graceful_shutdown(shutdown)
        .await
}
