pub mod appresult;
pub mod board;
pub mod config;
pub mod db;

use axum::{
    debug_handler, extract::FromRef, http::{header::CONTENT_TYPE, Method}, routing::get, Json, Router
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(hello))
        .merge(board::router())
        .with_state(state)
        .layer(cors)
}

#[debug_handler]
async fn hello() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "loopboard is live",
    }))
}
