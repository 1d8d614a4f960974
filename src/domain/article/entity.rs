// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleTitle, AuthorName, NiceCount,
};
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};

/// A stored article. `comments` stays empty until the detail fetch merges
/// the comment list in; every other read path leaves it untouched.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub contents: ArticleBody,
    pub author: AuthorName,
    pub nice_count: NiceCount,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Article {
    /// Attach the comment list fetched for this article, in store order.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub contents: ArticleBody,
    pub author: AuthorName,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::{Comment, CommentId, CommentMessage};
    use chrono::Utc;

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            contents: ArticleBody::new("body").unwrap(),
            author: AuthorName::new("saito").unwrap(),
            nice_count: NiceCount::zero(),
            created_at: Utc::now(),
            comments: Vec::new(),
        }
    }

    fn sample_comment(id: i64) -> Comment {
        Comment {
            id: CommentId::new(id).unwrap(),
            article_id: ArticleId::new(1).unwrap(),
            message: CommentMessage::new(format!("comment {id}")).unwrap(),
            author: AuthorName::new("tanaka").unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn with_comments_keeps_order() {
        let article = sample_article().with_comments(vec![sample_comment(1), sample_comment(2)]);
        let ids: Vec<i64> = article
            .comments
            .iter()
            .map(|c| i64::from(c.id))
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn comments_start_empty() {
        assert!(sample_article().comments.is_empty());
    }
}
