use crate::GiftId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a participant: a seat number or the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantId {
    Host,
    Seat(u32),
}

impl ParticipantId {
    pub fn seat(&self) -> Option<u32> {
        match self {
            ParticipantId::Seat(n) => Some(*n),
            ParticipantId::Host => None,
        }
    }

    pub fn is_host(&self) -> bool {
        matches!(self, ParticipantId::Host)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantId::Host => write!(f, "host"),
            ParticipantId::Seat(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Ordinary,
    Host,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    role: Role,
    is_eligible: bool,
    has_drawn: bool,
    gift_received: Option<GiftId>,
}

impl Participant {
    pub fn host(name: impl Into<String>) -> Self {
        Self::new(ParticipantId::Host, name.into(), Role::Host)
    }

    pub fn seat(seat: u32, name: impl Into<String>) -> Self {
        Self::new(ParticipantId::Seat(seat), name.into(), Role::Ordinary)
    }

    fn new(id: ParticipantId, name: String, role: Role) -> Self {
        Self {
            id,
            name,
            role,
            is_eligible: true,
            has_drawn: false,
            gift_received: None,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_host(&self) -> bool {
        self.role == Role::Host
    }

    pub fn is_eligible(&self) -> bool {
        self.is_eligible
    }

    pub fn has_drawn(&self) -> bool {
        self.has_drawn
    }

    pub fn gift_received(&self) -> Option<GiftId> {
        self.gift_received
    }

    /// Eligible and still waiting for a turn.
    pub fn can_draw(&self) -> bool {
        self.is_eligible && !self.has_drawn
    }

    /// Flip the opt-in flag. The host cannot opt out.
    pub(crate) fn toggle_eligibility(&mut self) -> bool {
        if !self.is_host() {
            self.is_eligible = !self.is_eligible;
        }
        self.is_eligible
    }

    pub(crate) fn set_eligible(&mut self, eligible: bool) {
        if !self.is_host() {
            self.is_eligible = eligible;
        }
    }

    pub(crate) fn record_draw(&mut self, gift: GiftId) {
        debug_assert!(!self.has_drawn, "{} drew twice", self.id);
        self.has_drawn = true;
        self.gift_received = Some(gift);
    }

    pub(crate) fn clear_draw(&mut self) {
        self.has_drawn = false;
        self.gift_received = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_cannot_opt_out() {
        let mut host = Participant::host("Teacher");
        assert!(host.toggle_eligibility());
        assert!(host.toggle_eligibility());
        host.set_eligible(false);
        assert!(host.is_eligible());
    }

    #[test]
    fn test_record_and_clear_draw() {
        let mut p = Participant::seat(4, "No. 4");
        assert!(p.can_draw());

        p.record_draw(9);
        assert!(p.has_drawn());
        assert_eq!(p.gift_received(), Some(9));
        assert!(!p.can_draw());

        p.clear_draw();
        assert!(!p.has_drawn());
        assert_eq!(p.gift_received(), None);
    }

    #[test]
    fn test_participant_id_display() {
        assert_eq!(ParticipantId::Host.to_string(), "host");
        assert_eq!(ParticipantId::Seat(12).to_string(), "12");
        assert_eq!(ParticipantId::Seat(12).seat(), Some(12));
        assert_eq!(ParticipantId::Host.seat(), None);
    }
}
