use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    InvalidTag(&'static str),
    InvalidWeight(&'static str),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidTag(message) => write!(f, "invalid language tag: {message}"),
            CoreError::InvalidWeight(message) => write!(f, "invalid weight: {message}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::CoreError;
    use alloc::string::ToString;

    #[test]
    fn display_formats_invalid_tag() {
        let err = CoreError::InvalidTag("empty");
        assert_eq!(err.to_string(), "invalid language tag: empty");
    }

    #[test]
    fn display_formats_invalid_weight() {
        let err = CoreError::InvalidWeight("out of range");
        assert_eq!(err.to_string(), "invalid weight: out of range");
    }
}
