// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::comment::CommentWriteRepository,
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(write_repo: Arc<dyn CommentWriteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { write_repo, clock }
    }
}
