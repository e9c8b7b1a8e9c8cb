use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("File {0} is not a jar or war file")]
    UnsupportedExtension(String),

    #[error("Failed to serialize dependencies: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
