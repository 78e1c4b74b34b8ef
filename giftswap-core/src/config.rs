use crate::error::{DrawError, Result};
use serde::{Deserialize, Serialize};

/// Seats in the classroom the engine was first deployed for.
pub const DEFAULT_ROSTER_SIZE: u32 = 38;

/// Largest class the engine accepts.
pub const MAX_ROSTER_SIZE: u32 = 10_000;

/// Gift the host always opens with.
pub const DEFAULT_HOST_GIFT_ID: u32 = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub roster_size: u32,
    pub host_gift_id: u32,
    pub host_name: String,
    /// Seat display label, `{}` is replaced by the seat number.
    pub seat_label: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster_size: DEFAULT_ROSTER_SIZE,
            host_gift_id: DEFAULT_HOST_GIFT_ID,
            host_name: "Teacher".to_string(),
            seat_label: "No. {}".to_string(),
        }
    }
}

impl GameConfig {
    pub fn new(roster_size: u32) -> Self {
        Self {
            roster_size,
            ..Self::default()
        }
    }

    pub fn seat_name(&self, seat: u32) -> String {
        if self.seat_label.contains("{}") {
            self.seat_label.replace("{}", &seat.to_string())
        } else {
            format!("{} {}", self.seat_label, seat)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.roster_size == 0 {
            return Err(DrawError::config("Roster size must be greater than 0"));
        }

        if self.roster_size > MAX_ROSTER_SIZE {
            return Err(DrawError::config(format!(
                "Roster size {} exceeds the maximum of {}",
                self.roster_size, MAX_ROSTER_SIZE
            )));
        }

        if self.host_gift_id == 0 {
            return Err(DrawError::config("Host gift id must be greater than 0"));
        }

        if self.host_name.trim().is_empty() {
            return Err(DrawError::config("Host name cannot be empty"));
        }

        Ok(())
    }
}
