use std::io;
use rust_i18n::t;

#[derive(Debug)]
pub enum FormatError {
    Io(io::Error),
    Image(image::ImageError),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::Io(err) => write!(f, "{}", t!("error.io_error", err = err.to_string())),
            FormatError::Image(err) => write!(f, "{}", t!("error.image_error", err = err.to_string())),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<io::Error> for FormatError {
    fn from(err: io::Error) -> Self { FormatError::Io(err) }
}

impl From<image::ImageError> for FormatError {
    fn from(err: image::ImageError) -> Self { FormatError::Image(err) }
}

pub type Result<T> = std::result::Result<T, FormatError>;
