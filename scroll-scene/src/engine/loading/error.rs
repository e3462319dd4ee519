#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("scene manifest failed to load: {0}")]
    Manifest(String),
    #[error("model failed to load: {0}")]
    Model(String),
    #[error("model has no scene at index {index}")]
    MissingScene { index: usize },
}
