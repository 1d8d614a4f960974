// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_comment;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
