use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Home directory could not be determined")]
    HomeDirUnavailable,

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),

    #[error("Serde JSON error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
