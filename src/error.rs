use thiserror::Error;

/// Fallback shown when the service reports failure without a reason
pub const GENERATION_FAILED_FALLBACK: &str = "Ошибка генерации";

/// Fallback shown when the call never produced a usable response
pub const TRY_AGAIN_FALLBACK: &str = "Попробуйте еще раз";

/// Errors a generation attempt can end with.
///
/// None of these are fatal: `EmptyDescription` never leaves the machine,
/// the other two leave the workflow in `Failed` from which the user can
/// retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Description is empty after trimming
    #[error("Опишите, какой сайт вы хотите создать")]
    EmptyDescription,

    /// Network failure or a response body that could not be interpreted
    #[error("Попробуйте еще раз")]
    Transport(String),

    /// The service answered and explicitly reported failure
    #[error("{0}")]
    Application(String),
}

impl GenerateError {
    pub fn transport(reason: impl std::fmt::Display) -> Self {
        GenerateError::Transport(reason.to_string())
    }

    /// Build an application failure, falling back to the generic message
    /// when the service gave no usable reason
    pub fn application(reason: Option<&str>) -> Self {
        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(GENERATION_FAILED_FALLBACK);
        GenerateError::Application(reason.to_string())
    }

    /// Message shown to the user and carried by `WorkflowState::Failed`
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        GenerateError::transport(err)
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::transport(format!("invalid response body: {}", err))
    }
}
