// src/application/commands/articles/nice.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ErrorKind, ServiceError, ServiceResult},
    },
    domain::article::ArticleId,
};

pub struct IncrementNiceCommand {
    pub article: ArticleDto,
}

impl ArticleCommandService {
    /// Bump the like counter for the submitted article by exactly one.
    ///
    /// The response echoes the submitted value with its counter
    /// incremented instead of re-reading the row, so concurrent increments
    /// on the same article can briefly disagree with the store.
    pub async fn increment_nice(&self, command: IncrementNiceCommand) -> ServiceResult<ArticleDto> {
        let article = command.article;
        let id = ArticleId::new(article.id)?;

        let updated = self
            .write_repo
            .increment_nice(id)
            .await
            .map_err(|err| ErrorKind::UpdateFailed.wrap(err, "failed to update nice count"))?;

        if !updated {
            return Err(ServiceError::new(
                ErrorKind::NotFound,
                "target article does not exist",
            ));
        }

        Ok(ArticleDto {
            nice_count: article.nice_count + 1,
            ..article
        })
    }
}
