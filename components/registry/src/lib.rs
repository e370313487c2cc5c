use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error("Registry request failed: {0}")]
    Api(String),

    #[error(transparent)]
    Json(#[from] serde_json::error::Error),

    #[error(transparent)]
    UrlParse(#[from] url::ParseError),

    #[error(transparent)]
    Paginate(#[from] paginate::Error),
}

impl Error {
    pub fn new(s: String) -> Self {
        Error::Message(s)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod listing;
pub mod params;
pub mod response;

pub use listing::{placeholder, Listing, ModuleRow, ResultRange, StatsView};
pub use params::{ListingParams, Routes};
pub use response::{ListRequest, ListResponse, ModuleEntry, Stats};
