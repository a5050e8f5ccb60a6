#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing IDF score for word '{0}'")]
    MissingIdf(String),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
