use crate::{GamePhase, GiftId, ParticipantId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    #[error("Participant not found: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("Gift {0} is not available")]
    GiftUnavailable(GiftId),

    #[error("No current drawer")]
    NoCurrentDrawer,

    #[error("Host must open with gift {expected}, got {got}")]
    HostGiftRequired { expected: GiftId, got: GiftId },

    #[error("Another draw is in progress")]
    DrawInProgress,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DrawError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn wrong_phase(expected: GamePhase, actual: GamePhase) -> Self {
        Self::InvalidState(format!("expected {:?}, game is {:?}", expected, actual))
    }
}

// serde_json::Error is not Clone, keep the message only
impl From<serde_json::Error> for DrawError {
    fn from(err: serde_json::Error) -> Self {
        DrawError::Serialization(err.to_string())
    }
}
