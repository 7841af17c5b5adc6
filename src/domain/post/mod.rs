pub mod entity;

pub use entity::Post;
