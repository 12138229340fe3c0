use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),
    #[error("Malformed catalog response: {0}")]
    MalformedCatalog(String),
    #[error("Catalog has {0} entries, need at least 2 for top-2 selection")]
    InsufficientCatalog(usize),
    #[error("Form I/O error: {0}")]
    FormIo(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::FormIo(error.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        AppError::FormIo(error.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
