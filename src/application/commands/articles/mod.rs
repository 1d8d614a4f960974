mod create;
mod nice;
mod service;

pub use create::CreateArticleCommand;
pub use nice::IncrementNiceCommand;
pub use service::ArticleCommandService;
