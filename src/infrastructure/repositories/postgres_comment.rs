// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::{ArticleId, AuthorName};
use crate::domain::comment::{
    Comment, CommentId, CommentMessage, CommentReadRepository, CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    message: String,
    author_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            message: CommentMessage::new(row.message)?,
            author: AuthorName::new(row.author_name)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            article_id,
            message,
            author,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (article_id, message, author_name, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, article_id, message, author_name, created_at",
        )
        .bind(i64::from(article_id))
        .bind(message.as_str())
        .bind(author.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, message, author_name, created_at
             FROM comments WHERE article_id = $1 ORDER BY id",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }
}
