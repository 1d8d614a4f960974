use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ErrorKind, ServiceError, ServiceResult},
};
use crate::domain::article::ArticleId;

pub struct GetArticleDetailQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Fetch the article row and its comment list in parallel and merge
    /// them into one result.
    ///
    /// Each fetch owns its half of the outcome; `tokio::join!` is the only
    /// barrier. Neither side is cancelled when the other fails, and the
    /// merge never runs before both have settled.
    ///
    /// The article is the primary resource: when it cannot be resolved,
    /// the comment outcome is discarded (logged below when it was itself a
    /// failure) and only the article's classification reaches the caller.
    pub async fn get_article_detail(&self, query: GetArticleDetailQuery) -> ServiceResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;

        let (article_res, comments_res) = tokio::join!(
            self.article_repo.find_by_id(id),
            self.comment_repo.list_by_article(id),
        );

        let article = match article_res {
            Ok(Some(article)) => article,
            Ok(None) => {
                if let Err(err) = &comments_res {
                    tracing::warn!(article_id = query.id, error = %err, "discarding comment fetch failure: article missing");
                }
                return Err(ServiceError::new(ErrorKind::NotFound, "article not found"));
            }
            Err(err) => {
                if let Err(sibling) = &comments_res {
                    tracing::warn!(article_id = query.id, error = %sibling, "discarding comment fetch failure: article fetch failed");
                }
                return Err(ErrorKind::SelectFailed.wrap(err, "failed to fetch article"));
            }
        };

        let comments = comments_res
            .map_err(|err| ErrorKind::SelectFailed.wrap(err, "failed to fetch comment list"))?;

        Ok(article.with_comments(comments).into())
    }
}
