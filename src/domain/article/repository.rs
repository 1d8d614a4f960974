use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Bump the like counter for `id` in the store. Returns whether a row
    /// matched; a miss is not a persistence failure.
    async fn increment_nice(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// `None` means zero rows matched, which the service layer classifies
    /// separately from other fetch failures.
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// One page of articles in store order. An empty page is a successful
    /// result here; the service layer decides what that means.
    async fn list_page(&self, page: u32) -> DomainResult<Vec<Article>>;
}
