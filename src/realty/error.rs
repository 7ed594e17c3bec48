use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtyError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("A product with id {0} already exists")]
    DuplicateId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for RealtyError {
    fn from(err: confique::Error) -> Self {
        RealtyError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;
