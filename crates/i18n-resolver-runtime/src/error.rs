use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    NoMatchingFiles,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::NoMatchingFiles => f.write_str("NO_MATCHING_FILES"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("can't load dictionary: {reason}")]
    CantLoadDictionary { reason: LoadFailure },
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
