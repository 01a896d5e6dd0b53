use axum::{debug_handler, extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::AppResult;

use super::store;

#[derive(Deserialize)]
pub(crate) struct PostMessageBody {
    content: String,
}

#[derive(Serialize)]
pub(crate) struct PostMessageReply {
    status: &'static str,
    id: i64,
}

#[debug_handler]
pub(crate) async fn post_message(
    State(db_pool): State<SqlitePool>,
    Json(PostMessageBody { content }): Json<PostMessageBody>,
) -> AppResult<Json<PostMessageReply>> {
    let id = store::add_message(&db_pool, &content).await?;
    Ok(Json(PostMessageReply { status: "success", id }))
}
