use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapsErrorCode {
    InvalidArgument,
    Serialization,
}

impl MapsErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MapsErrorCode::InvalidArgument => "maps/invalid-argument",
            MapsErrorCode::Serialization => "maps/serialization",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MapsError {
    pub code: MapsErrorCode,
    message: String,
}

impl MapsError {
    pub fn new(code: MapsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MapsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl Error for MapsError {}

impl From<serde_json::Error> for MapsError {
    fn from(err: serde_json::Error) -> Self {
        serialization_error(err.to_string())
    }
}

pub type MapsResult<T> = Result<T, MapsError>;

pub fn invalid_argument(message: impl Into<String>) -> MapsError {
    MapsError::new(MapsErrorCode::InvalidArgument, message)
}

pub fn serialization_error(message: impl Into<String>) -> MapsError {
    MapsError::new(MapsErrorCode::Serialization, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_code() {
        let err = invalid_argument("`src` must be a map");
        assert_eq!(
            err.to_string(),
            "`src` must be a map (maps/invalid-argument)"
        );
        assert_eq!(err.code, MapsErrorCode::InvalidArgument);
    }

    #[test]
    fn json_errors_become_serialization_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MapsError::from(json_err);
        assert_eq!(err.code_str(), "maps/serialization");
        assert!(!err.message().is_empty());
    }
}
