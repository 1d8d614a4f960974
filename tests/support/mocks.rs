// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;

use kawaraban::application::ports::time::Clock;
use kawaraban::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
    AuthorName, NewArticle, NiceCount,
};
use kawaraban::domain::comment::{
    Comment, CommentId, CommentMessage, CommentReadRepository, CommentWriteRepository, NewComment,
};
use kawaraban::domain::errors::{DomainError, DomainResult};

/// Mirrors the page size of the Postgres repository.
pub const ARTICLES_PER_PAGE: usize = 5;

pub fn persistence_failure(message: &str) -> DomainError {
    DomainError::Persistence {
        message: message.into(),
        source: Box::new(std::io::Error::other("connection reset by peer")),
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
}

/* -------------------------------- InMemoryStore -------------------------------- */

/// Article and comment tables in memory, implementing all four repository
/// traits. Seeded rows use explicit ids; inserts allocate past the highest
/// existing id the way a serial column would.
#[derive(Default)]
pub struct InMemoryStore {
    articles: Mutex<BTreeMap<i64, Article>>,
    comments: Mutex<Vec<Comment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_article(&self, id: i64, title: &str, nice_count: i64) {
        let article = Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            contents: ArticleBody::new(format!("contents of {title}")).unwrap(),
            author: AuthorName::new("saito").unwrap(),
            nice_count: NiceCount::new(nice_count).unwrap(),
            created_at: base_time() + Duration::minutes(id),
            comments: Vec::new(),
        };
        self.articles.lock().unwrap().insert(id, article);
    }

    pub fn seed_comment(&self, id: i64, article_id: i64, message: &str) {
        let comment = Comment {
            id: CommentId::new(id).unwrap(),
            article_id: ArticleId::new(article_id).unwrap(),
            message: CommentMessage::new(message).unwrap(),
            author: AuthorName::new("tanaka").unwrap(),
            created_at: base_time() + Duration::minutes(id),
        };
        self.comments.lock().unwrap().push(comment);
    }

    pub fn nice_count(&self, id: i64) -> Option<i64> {
        self.articles
            .lock()
            .unwrap()
            .get(&id)
            .map(|a| i64::from(a.nice_count))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let id = articles.keys().next_back().copied().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            contents: article.contents,
            author: article.author,
            nice_count: NiceCount::zero(),
            created_at: article.created_at,
            comments: Vec::new(),
        };
        articles.insert(id, stored.clone());
        Ok(stored)
    }

    async fn increment_nice(&self, id: ArticleId) -> DomainResult<bool> {
        let mut articles = self.articles.lock().unwrap();
        match articles.get_mut(&i64::from(id)) {
            Some(article) => {
                article.nice_count = article.nice_count.incremented();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, page: u32) -> DomainResult<Vec<Article>> {
        let offset = ARTICLES_PER_PAGE * (page as usize - 1);
        Ok(self
            .articles
            .lock()
            .unwrap()
            .values()
            .skip(offset)
            .take(ARTICLES_PER_PAGE)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CommentWriteRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let id = comments.iter().map(|c| i64::from(c.id)).max().unwrap_or(0) + 1;
        let stored = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            message: comment.message,
            author: comment.author,
            created_at: comment.created_at,
        };
        comments.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl CommentReadRepository for InMemoryStore {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect())
    }
}

/* -------------------------------- failing repositories -------------------------------- */

/// Article reads that always fail with a persistence error.
pub struct FailingArticleRead;

#[async_trait]
impl ArticleReadRepository for FailingArticleRead {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(persistence_failure("article select failed"))
    }

    async fn list_page(&self, _page: u32) -> DomainResult<Vec<Article>> {
        Err(persistence_failure("article list select failed"))
    }
}

/// Comment reads that always fail with a persistence error.
pub struct FailingCommentRead;

#[async_trait]
impl CommentReadRepository for FailingCommentRead {
    async fn list_by_article(&self, _article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        Err(persistence_failure("comment select failed"))
    }
}

/// Article writes that always fail with a persistence error.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(persistence_failure("article insert failed"))
    }

    async fn increment_nice(&self, _id: ArticleId) -> DomainResult<bool> {
        Err(persistence_failure("nice update failed"))
    }
}

/* -------------------------------- clock -------------------------------- */

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
