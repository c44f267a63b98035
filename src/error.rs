use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("load failed")]
    Failed,
    #[error("load failed: {0}")]
    Message(String),
}

impl From<anyhow::Error> for LoadError {
    fn from(err: anyhow::Error) -> Self {
        LoadError::Message(format!("{err:#}"))
    }
}
