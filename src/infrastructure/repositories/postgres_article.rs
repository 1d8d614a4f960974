// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
    AuthorName, NewArticle, NiceCount,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const ARTICLES_PER_PAGE: i64 = 5;

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    contents: String,
    author_name: String,
    nice_count: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            contents: ArticleBody::new(row.contents)?,
            author: AuthorName::new(row.author_name)?,
            nice_count: NiceCount::new(row.nice_count)?,
            created_at: row.created_at,
            comments: Vec::new(),
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            contents,
            author,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, contents, author_name, nice_count, created_at)
             VALUES ($1, $2, $3, 0, $4)
             RETURNING id, title, contents, author_name, nice_count, created_at",
        )
        .bind(title.as_str())
        .bind(contents.as_str())
        .bind(author.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn increment_nice(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("UPDATE articles SET nice_count = nice_count + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, contents, author_name, nice_count, created_at
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        maybe_row.map(Article::try_from).transpose()
    }

    async fn list_page(&self, page: u32) -> DomainResult<Vec<Article>> {
        let offset = ARTICLES_PER_PAGE * i64::from(page.saturating_sub(1));

        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, contents, author_name, nice_count, created_at
             FROM articles ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(ARTICLES_PER_PAGE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
