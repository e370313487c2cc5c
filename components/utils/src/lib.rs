pub mod ago;
pub mod emoji;
