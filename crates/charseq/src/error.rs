/// Error type for sequence operations.
/// "Not found" is never an error here - searches report absence
/// through `Option::None`, so every variant below is a real fault.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqError {
    /// Unit access outside `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// Byte offset does not land on a UTF-8 character boundary
    NotCharBoundary { index: usize },
    /// The host regex engine rejected the pattern
    InvalidPattern(regex::Error),
}

pub type SeqResult<T> = Result<T, SeqError>;

impl std::fmt::Display for SeqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeqError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            SeqError::NotCharBoundary { index } => {
                write!(f, "index {} is not a character boundary", index)
            }
            SeqError::InvalidPattern(e) => write!(f, "invalid pattern: {}", e),
        }
    }
}

impl std::error::Error for SeqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqError::InvalidPattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for SeqError {
    fn from(e: regex::Error) -> Self {
        SeqError::InvalidPattern(e)
    }
}
