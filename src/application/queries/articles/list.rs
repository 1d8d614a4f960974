use super::ArticleQueryService;
use crate::application::{
    dto::ArticleDto,
    error::{ErrorKind, ServiceError, ServiceResult},
};

pub struct ListArticlesQuery {
    pub page: u32,
}

impl ArticleQueryService {
    /// One page of articles in store order. The store reports a page with
    /// no rows as a plain empty result; here that becomes an `EmptyResult`
    /// failure so callers never see an empty success.
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ServiceResult<Vec<ArticleDto>> {
        let articles = self
            .article_repo
            .list_page(query.page)
            .await
            .map_err(|err| ErrorKind::SelectFailed.wrap(err, "failed to fetch article list"))?;

        if articles.is_empty() {
            return Err(ServiceError::new(
                ErrorKind::EmptyResult,
                "no articles in the requested page",
            ));
        }

        Ok(articles.into_iter().map(Into::into).collect())
    }
}
