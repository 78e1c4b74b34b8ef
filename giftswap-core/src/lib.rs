//! Turn-allocation engine for a classroom gift exchange
//!
//! Participants draw numbered gifts one at a time. The host always opens with
//! a reserved gift, and whoever sits in the seat matching the number of the
//! gift just drawn goes next. The engine is pure state: randomness and
//! presentation live with the caller.

pub mod config;
pub mod error;
pub mod game;
pub mod gift;
pub mod history;
pub mod participant;
pub mod roster;
pub mod shared;

pub use config::{GameConfig, DEFAULT_HOST_GIFT_ID, DEFAULT_ROSTER_SIZE, MAX_ROSTER_SIZE};
pub use error::{DrawError, Result};
pub use game::{DrawOutcome, DrawSession, GamePhase, SessionSummary};
pub use gift::{compute_gift_pool, Gift, GiftId};
pub use history::{History, HistoryItem};
pub use participant::{Participant, ParticipantId, Role};
pub use roster::Roster;
pub use shared::SharedSession;

/// Create a session in setup with every seat opted in
pub fn new_session(roster_size: u32) -> Result<DrawSession> {
    DrawSession::new(GameConfig::new(roster_size))
}
