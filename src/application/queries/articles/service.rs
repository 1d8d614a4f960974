use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, comment::CommentReadRepository};

pub struct ArticleQueryService {
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        article_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
        }
    }
}
