// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, IncrementNiceCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleDetailQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub contents: String,
    pub author: String,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    if params.page == 0 {
        return Err(HttpError::bad_request("page must be a positive integer"));
    }

    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { page: params.page })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article_detail(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_detail(GetArticleDetailQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        contents: payload.contents,
        author: payload.author,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn increment_nice(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ArticleDto>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .increment_nice(IncrementNiceCommand { article: payload })
        .await
        .into_http()
        .map(Json)
}
