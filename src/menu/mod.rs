pub mod assets;
pub mod dto;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod source;

pub use dto::MenuSnapshot;
pub use repo_types::MenuItem;
