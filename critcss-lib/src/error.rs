use thiserror::Error;

/// Everything that can go wrong during an extraction call.
///
/// Pattern compilation, rule matching, and container rewriting never fail:
/// wanted entries are escaped before compilation and the tree walk is total.
/// The only fallible steps are resolving the CSS source and parsing it.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The input is not syntactically valid CSS.
    #[error("invalid CSS at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// The endpoint response signals failure or is structurally unusable.
    #[error("unusable endpoint response: {0}")]
    Input(String),

    /// A file-backed CSS source could not be read.
    #[error("failed to read CSS source: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
