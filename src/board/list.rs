use axum::{debug_handler, extract::State, Json};
use sqlx::SqlitePool;

use crate::AppResult;

use super::{store, MessageView};

#[debug_handler]
pub(crate) async fn list_messages(
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<MessageView>>> {
    let rows = store::list_messages(&db_pool).await?;
    Ok(Json(rows.into_iter().map(MessageView::from).collect()))
}
