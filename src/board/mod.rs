mod fetch;
mod list;
mod post;
pub mod store;

use axum::{routing::get, Router};
use serde::Serialize;
use time::OffsetDateTime;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list::list_messages).post(post::post_message))
        .route("/messages/{id}", get(fetch::message))
}

/// What clients see: the wrapped display sequence instead of the raw id.
#[derive(Serialize)]
pub struct MessageView {
    pub display_id: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<store::StoredMessage> for MessageView {
    fn from(row: store::StoredMessage) -> Self {
        Self {
            display_id: store::display_id(row.id),
            content: row.content,
            created_at: row.created_at,
        }
    }
}
