use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{field} must be greater than zero")]
    InvalidDuration { field: &'static str },
    #[error("at least one page section is required")]
    NoSections,
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("content asset not found: {0}")]
    MissingContent(String),
    #[error("couldn't parse content: {0}")]
    Content(String),
}
