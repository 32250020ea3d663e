use thiserror::Error;

/// Errors raised by the render core.
///
/// Missing data is never an error: it only makes an entry or section absent.
/// These variants cover input whose shape the renderers cannot work with.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("Unexpected shape at {path}: expected {expected}, found {found}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Page height must be a positive number of inches, got {0}")]
    InvalidPageHeight(f64),
}
