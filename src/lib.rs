mod error;

pub mod command;
pub mod logger;
pub mod opts;

pub use error::{Error, Result};

pub use crate::command::listing;
pub use crate::command::stats;
pub use crate::command::window;
