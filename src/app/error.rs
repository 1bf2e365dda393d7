use std::io;
use crate::core::error::CoreError;
use crate::format::error::FormatError;
use rust_i18n::t;

#[derive(Debug)]
pub enum AppError {
    Core(CoreError),
    Format(FormatError),
    Io(io::Error),
    Clipboard(arboard::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Core(err) => write!(f, "{}", t!("error.core_error", err = err.to_string())),
            AppError::Format(err) => write!(f, "{}", t!("error.format_error", err = err.to_string())),
            AppError::Io(err) => write!(f, "{}", t!("error.io_error", err = err.to_string())),
            AppError::Clipboard(err) => write!(f, "{}", t!("error.clipboard_error", err = err.to_string())),
        }
    }
}

impl std::error::Error for AppError {}

impl From<CoreError> for AppError { fn from(err: CoreError) -> Self { AppError::Core(err) } }
impl From<FormatError> for AppError { fn from(err: FormatError) -> Self { AppError::Format(err) } }
impl From<io::Error> for AppError { fn from(err: io::Error) -> Self { AppError::Io(err) } }
impl From<arboard::Error> for AppError { fn from(err: arboard::Error) -> Self { AppError::Clipboard(err) } }

pub type Result<T> = std::result::Result<T, AppError>;
