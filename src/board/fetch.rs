use axum::{
    debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::SqlitePool;

use crate::AppResult;

use super::{store, MessageView};

#[debug_handler]
pub(crate) async fn message(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let Some(row) = store::fetch_message(&db_pool, id).await? else {
        return Ok((StatusCode::NOT_FOUND, format!("no message with id {id}")).into_response());
    };

    Ok(Json(MessageView::from(row)).into_response())
}
