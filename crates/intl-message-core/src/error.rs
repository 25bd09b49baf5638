use alloc::string::String;
use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    MissingFormatter,
    Unsupported(&'static str),
    InvalidInput(&'static str),
    Format(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::MissingFormatter => {
                f.write_str("no message formatter available; wire one in before rendering")
            }
            CoreError::Unsupported(message) => write!(f, "unsupported: {message}"),
            CoreError::InvalidInput(message) => write!(f, "invalid input: {message}"),
            CoreError::Format(message) => write!(f, "format error: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}
