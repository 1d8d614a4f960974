// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        ports::time::Clock,
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::{CommentReadRepository, CommentWriteRepository},
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_read_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
            comment_commands,
        }
    }
}
