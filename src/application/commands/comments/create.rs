// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ErrorKind, ServiceResult},
    },
    domain::{
        article::{ArticleId, AuthorName},
        comment::{CommentMessage, NewComment},
    },
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub message: String,
    pub author: String,
}

impl CommentCommandService {
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ServiceResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        let message = CommentMessage::new(command.message)?;
        let author = AuthorName::new(command.author)?;

        let new_comment = NewComment {
            article_id,
            message,
            author,
            created_at: self.clock.now(),
        };

        let created = self
            .write_repo
            .insert(new_comment)
            .await
            .map_err(|err| ErrorKind::InsertFailed.wrap(err, "failed to record comment"))?;

        Ok(created.into())
    }
}
