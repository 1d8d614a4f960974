mod detail;
mod list;
mod service;

pub use detail::GetArticleDetailQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
