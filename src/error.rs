use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("key-value store error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("menu storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
}

impl MenuError {
    /// Message shown on the home screen when loading fails.
    pub fn user_message(&self) -> String {
        match self {
            MenuError::Storage(_) => "Failed to load menu".to_string(),
            other => other.to_string(),
        }
    }
}
