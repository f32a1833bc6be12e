use crate::exit_code;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("unknown profile: {name} (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("conflicting mode: {0}")]
    ConflictingMode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScorerError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ScorerError::UnknownProfile { .. }
            | ScorerError::InvalidProfile(_)
            | ScorerError::ConflictingMode(_) => exit_code::INVALID_INPUT,
            ScorerError::Io(_) | ScorerError::Json(_) => exit_code::RUNTIME_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScorerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_share_the_usage_exit_code() {
        let errors = [
            ScorerError::UnknownProfile {
                name: "x".to_string(),
                available: "aztec".to_string(),
            },
            ScorerError::InvalidProfile("blank".to_string()),
            ScorerError::ConflictingMode("both".to_string()),
        ];
        for error in &errors {
            assert_eq!(error.exit_code(), exit_code::INVALID_INPUT);
        }
    }

    #[test]
    fn io_errors_are_runtime_failures() {
        let error = ScorerError::from(std::io::Error::other("broken pipe"));
        assert_eq!(error.exit_code(), exit_code::RUNTIME_FAILURE);
    }

    #[test]
    fn unknown_profile_message_lists_available_names() {
        let error = ScorerError::UnknownProfile {
            name: "nope".to_string(),
            available: "aztec, zama, soundness".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("nope"));
        assert!(message.contains("aztec, zama, soundness"));
    }
}
