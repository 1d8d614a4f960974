// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ErrorKind, ServiceResult},
    },
    domain::article::{ArticleBody, ArticleTitle, AuthorName, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub contents: String,
    pub author: String,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ServiceResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let contents = ArticleBody::new(command.contents)?;
        let author = AuthorName::new(command.author)?;

        let new_article = NewArticle {
            title,
            contents,
            author,
            created_at: self.clock.now(),
        };

        let created = self
            .write_repo
            .insert(new_article)
            .await
            .map_err(|err| ErrorKind::InsertFailed.wrap(err, "failed to record article"))?;

        Ok(created.into())
    }
}
