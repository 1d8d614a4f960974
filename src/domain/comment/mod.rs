pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::{CommentReadRepository, CommentWriteRepository};
pub use value_objects::{CommentId, CommentMessage};
