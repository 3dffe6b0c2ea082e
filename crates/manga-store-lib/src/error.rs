use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{0}")]
    InvalidInput(String),
}

impl Error {
    /// Status code for errors reported by the server
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
