// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::CreateCommentCommand, dto::CommentDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub article_id: i64,
    pub message: String,
    pub author: String,
}

pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = CreateCommentCommand {
        article_id: payload.article_id,
        message: payload.message,
        author: payload.author,
    };

    state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()
        .map(Json)
}
