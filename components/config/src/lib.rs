use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("Not a file {0}")]
    NotFile(PathBuf),

    #[error("Page size must be positive, got {0}")]
    PageSize(i64),

    #[error("Base path {0} must start with a slash")]
    BasePath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlDeser(#[from] toml::de::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Lang(#[from] unic_langid::LanguageIdentifierError),
}

impl Error {
    pub fn new(s: String) -> Self {
        Error::Message(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;

pub use config::*;
