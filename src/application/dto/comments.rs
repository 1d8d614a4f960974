use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub message: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            message: comment.message.into(),
            author: comment.author.into(),
            created_at: comment.created_at,
        }
    }
}
