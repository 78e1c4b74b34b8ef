use crate::{DrawError, GameConfig, GiftId, Participant, ParticipantId, Result};
use serde::{Deserialize, Serialize};

/// The host plus one ordinary participant per seat.
///
/// Participants are kept host first, then seats in ascending order. That order
/// is also the tie-break used by the fallback drawer search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    roster_size: u32,
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(roster_size: u32) -> Self {
        Self::with_config(&GameConfig::new(roster_size))
    }

    pub fn with_config(config: &GameConfig) -> Self {
        let mut participants = Vec::with_capacity(config.roster_size as usize + 1);
        participants.push(Participant::host(config.host_name.clone()));
        participants.extend((1..=config.roster_size).map(|n| Participant::seat(n, config.seat_name(n))));

        Self {
            roster_size: config.roster_size,
            participants,
        }
    }

    pub fn roster_size(&self) -> u32 {
        self.roster_size
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ParticipantId) -> Option<&mut Participant> {
        self.participants.iter_mut().find(|p| p.id() == id)
    }

    pub fn host(&self) -> &Participant {
        &self.participants[0]
    }

    pub fn eligible_count(&self) -> usize {
        self.participants.iter().filter(|p| p.is_eligible()).count()
    }

    /// Participants still waiting for a turn.
    pub fn waiting(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| p.can_draw())
    }

    /// Flip a seat's opt-in flag and return the new value.
    ///
    /// Toggling the host is accepted and ignored.
    pub fn toggle_eligibility(&mut self, id: ParticipantId) -> Result<bool> {
        let participant = self.get_mut(id).ok_or(DrawError::UnknownParticipant(id))?;
        let eligible = participant.toggle_eligibility();

        tracing::debug!("Participant {} eligibility now {}", id, eligible);
        Ok(eligible)
    }

    pub fn set_eligibility(&mut self, id: ParticipantId, eligible: bool) -> Result<()> {
        let participant = self.get_mut(id).ok_or(DrawError::UnknownParticipant(id))?;
        participant.set_eligible(eligible);
        Ok(())
    }

    /// Who draws after someone took `gift_id`.
    ///
    /// Walks the seat ring starting at the seat numbered like the gift, then
    /// falls back to the first waiting participant in roster order.
    pub fn find_next_eligible_drawer(&self, gift_id: GiftId) -> Option<ParticipantId> {
        if let Some(seat) = self.probe_from(gift_id) {
            tracing::debug!("Probe from gift {} landed on seat {}", gift_id, seat);
            return Some(seat);
        }

        let fallback = self.first_waiting();
        if let Some(id) = fallback {
            tracing::warn!("Probe from gift {} found nobody, falling back to {}", gift_id, id);
        }
        fallback
    }

    /// One lap of `((gift_id - 1 + k) mod roster_size) + 1`.
    pub(crate) fn probe_from(&self, gift_id: GiftId) -> Option<ParticipantId> {
        if self.roster_size == 0 || gift_id == 0 {
            return None;
        }

        let size = self.roster_size as u64;
        let origin = gift_id as u64 - 1;

        (0..size)
            .map(|k| ParticipantId::Seat(((origin + k) % size) as u32 + 1))
            .find(|id| self.get(*id).map_or(false, Participant::can_draw))
    }

    pub(crate) fn first_waiting(&self) -> Option<ParticipantId> {
        self.waiting().next().map(Participant::id)
    }

    pub(crate) fn clear_draws(&mut self) {
        for participant in &mut self.participants {
            participant.clear_draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mark_drawn(roster: &mut Roster, id: ParticipantId, gift: GiftId) {
        roster.get_mut(id).unwrap().record_draw(gift);
    }

    #[test]
    fn test_initialize_roster() {
        let roster = Roster::new(38);

        assert_eq!(roster.participants().len(), 39);
        assert!(roster.host().is_host());
        assert_eq!(roster.eligible_count(), 39);
        assert!(roster.participants().iter().all(|p| !p.has_drawn()));

        let seats: Vec<u32> = roster
            .participants()
            .iter()
            .filter_map(|p| p.id().seat())
            .collect();
        assert_eq!(seats, (1..=38).collect::<Vec<_>>());
        assert_eq!(roster.get(ParticipantId::Seat(5)).unwrap().name(), "No. 5");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut roster = Roster::new(10);
        let seat = ParticipantId::Seat(3);

        assert!(!roster.toggle_eligibility(seat).unwrap());
        assert_eq!(roster.eligible_count(), 10);
        assert!(roster.toggle_eligibility(seat).unwrap());
        assert_eq!(roster.eligible_count(), 11);
    }

    #[test]
    fn test_toggle_host_is_ignored() {
        let mut roster = Roster::new(10);
        assert!(roster.toggle_eligibility(ParticipantId::Host).unwrap());
        assert!(roster.host().is_eligible());
    }

    #[test]
    fn test_toggle_unknown_seat() {
        let mut roster = Roster::new(10);
        let err = roster.toggle_eligibility(ParticipantId::Seat(11)).unwrap_err();
        assert_eq!(err, DrawError::UnknownParticipant(ParticipantId::Seat(11)));
    }

    #[test]
    fn test_probe_starts_at_gift_seat() {
        let roster = Roster::new(38);
        assert_eq!(roster.find_next_eligible_drawer(11), Some(ParticipantId::Seat(11)));
    }

    #[test]
    fn test_probe_wraps_past_roster_size() {
        let roster = Roster::new(4);
        // (11 - 1) mod 4 + 1
        assert_eq!(roster.find_next_eligible_drawer(11), Some(ParticipantId::Seat(3)));

        let roster = Roster::new(38);
        assert_eq!(roster.find_next_eligible_drawer(39), Some(ParticipantId::Seat(1)));
    }

    #[test]
    fn test_probe_skips_drawn_and_ineligible() {
        let mut roster = Roster::new(6);
        mark_drawn(&mut roster, ParticipantId::Seat(5), 2);
        roster.toggle_eligibility(ParticipantId::Seat(6)).unwrap();

        assert_eq!(roster.find_next_eligible_drawer(5), Some(ParticipantId::Seat(1)));
    }

    #[test]
    fn test_probe_reaches_seat_behind_origin() {
        let mut roster = Roster::new(5);
        mark_drawn(&mut roster, ParticipantId::Host, 11);
        for seat in [1, 3, 4, 5] {
            mark_drawn(&mut roster, ParticipantId::Seat(seat), seat);
        }

        // seat 2 sits before the origin, the lap still reaches it
        assert_eq!(roster.find_next_eligible_drawer(3), Some(ParticipantId::Seat(2)));
    }

    #[test]
    fn test_fallback_uses_roster_order() {
        let mut roster = Roster::new(3);
        for seat in 1..=3 {
            mark_drawn(&mut roster, ParticipantId::Seat(seat), seat);
        }

        assert_eq!(roster.probe_from(2), None);
        assert_eq!(roster.find_next_eligible_drawer(2), Some(ParticipantId::Host));
    }

    #[test]
    fn test_no_candidate_left() {
        let mut roster = Roster::new(2);
        mark_drawn(&mut roster, ParticipantId::Host, 11);
        mark_drawn(&mut roster, ParticipantId::Seat(1), 1);
        roster.toggle_eligibility(ParticipantId::Seat(2)).unwrap();

        assert_eq!(roster.find_next_eligible_drawer(1), None);
    }

    #[test]
    fn test_clear_draws_keeps_eligibility() {
        let mut roster = Roster::new(4);
        roster.toggle_eligibility(ParticipantId::Seat(2)).unwrap();
        mark_drawn(&mut roster, ParticipantId::Seat(1), 3);

        roster.clear_draws();

        assert!(roster.participants().iter().all(|p| !p.has_drawn()));
        assert!(!roster.get(ParticipantId::Seat(2)).unwrap().is_eligible());
        assert_eq!(roster.eligible_count(), 4);
    }
}
