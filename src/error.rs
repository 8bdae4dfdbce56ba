use thiserror::Error;

use crate::api::PromptRole;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("missing required participant: {role}")]
    MissingParticipant { role: PromptRole },

    #[error("no plotted point to submit")]
    MissingPlottedPoint,

    #[error("chart not found: {id}")]
    ChartNotFound { id: String },

    #[error("pitch not found: {id}")]
    PitchNotFound { id: String },

    #[error("persistence failed: {0}")]
    Persistence(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
