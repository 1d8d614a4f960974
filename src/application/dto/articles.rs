use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::comments::CommentDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub author: String,
    pub nice_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            contents: article.contents.into(),
            author: article.author.into(),
            nice_count: article.nice_count.into(),
            created_at: article.created_at,
            comments: article.comments.into_iter().map(Into::into).collect(),
        }
    }
}
