use crate::domain::article::value_objects::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    /// All comments for the article in store order, newest last. No
    /// matching rows yields an empty list, not an error.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;
}
