use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("unknown algorithm {0:?}, expected one of: sha256, sha512, sha1, md5")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
