use rust_i18n::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    OutOfBounds { x: u32, y: u32 },
    InvalidDimension { width: u32, height: u32 },
    EmptyHistory,
    PaletteNotFound(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::OutOfBounds { x, y } => write!(f, "{}", t!("error.out_of_bounds", x = x, y = y)),
            CoreError::InvalidDimension { width, height } => {
                write!(f, "{}", t!("error.invalid_dimension", width = width, height = height))
            }
            CoreError::EmptyHistory => write!(f, "{}", t!("error.empty_history")),
            CoreError::PaletteNotFound(name) => write!(f, "{}", t!("error.palette_not_found", name = name)),
        }
    }
}

impl std::error::Error for CoreError {}
pub type Result<T> = std::result::Result<T, CoreError>;
