// src/domain/comment/entity.rs
use crate::domain::article::value_objects::{ArticleId, AuthorName};
use crate::domain::comment::value_objects::{CommentId, CommentMessage};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub message: CommentMessage,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub message: CommentMessage,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
}
