#![allow(dead_code)]

use chess_store_server::{app, config::StorageConfig, db};
use reqwest::Client;
use serde_json::{json, Value};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A server bound to an ephemeral port with its own empty in-memory store.
/// Lives as long as the test's runtime.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    pub async fn start() -> Self {
        let pool = db::pool::create_pool(&StorageConfig::in_memory())
            .await
            .expect("Failed to open in-memory store");
        db::pool::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("No local address");

        tokio::spawn(app::serve(listener, pool, std::future::pending::<()>()));

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    /// Build a URL for an endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request")
    }

    /// Save a game and return its id.
    pub async fn save(&self, body: &Value) -> i64 {
        let resp = self.post("/save_game", body).await;
        assert_eq!(resp.status(), 200, "save_game should succeed");
        let body: Value = resp.json().await.unwrap();
        body["game_id"].as_i64().expect("game_id should be an integer")
    }
}

pub fn game_body(moves: &[&str]) -> Value {
    json!({
        "fen": START_FEN,
        "moveList": moves,
        "playerColor": "white",
        "difficulty": "easy",
    })
}
