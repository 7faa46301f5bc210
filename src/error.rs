use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Seconds must not be negative, got {0}")]
    NegativeSeconds(i64),

    #[error("Seconds must be a whole number, got {0}")]
    NotAnInteger(f64),

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FormatResult<T> = Result<T, FormatError>;
