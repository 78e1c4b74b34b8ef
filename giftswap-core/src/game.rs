use crate::gift::compute_gift_pool;
use crate::{
    DrawError, GameConfig, Gift, GiftId, History, HistoryItem, ParticipantId, Result, Roster,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    Playing,
    Finished,
}

/// Result of one committed draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawOutcome {
    pub record: HistoryItem,
    pub next_drawer: Option<ParticipantId>,
}

impl DrawOutcome {
    pub fn is_final(&self) -> bool {
        self.next_drawer.is_none()
    }
}

/// All state of one live gift exchange.
#[derive(Debug, Clone)]
pub struct DrawSession {
    config: GameConfig,
    phase: GamePhase,
    roster: Roster,
    gifts: Vec<Gift>,
    history: History,
    current_drawer: Option<ParticipantId>,
    last_gift: Option<GiftId>,
}

impl DrawSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            roster: Roster::with_config(&config),
            config,
            phase: GamePhase::Setup,
            gifts: Vec::new(),
            history: History::new(),
            current_drawer: None,
            last_gift: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_drawer(&self) -> Option<ParticipantId> {
        self.current_drawer
    }

    pub fn last_gift(&self) -> Option<GiftId> {
        self.last_gift
    }

    pub fn eligible_count(&self) -> usize {
        self.roster.eligible_count()
    }

    pub fn remaining_drawers(&self) -> usize {
        self.roster.waiting().count()
    }

    /// Untaken gift ids, ascending.
    pub fn available_gifts(&self) -> Vec<GiftId> {
        self.gifts
            .iter()
            .filter(|g| !g.is_taken())
            .map(Gift::id)
            .collect()
    }

    /// The host is up and nobody has drawn yet.
    pub fn is_host_opening(&self) -> bool {
        self.current_drawer == Some(ParticipantId::Host) && self.history.is_empty()
    }

    /// Opt a seat in or out. Only allowed before the game starts.
    pub fn toggle_eligibility(&mut self, id: ParticipantId) -> Result<bool> {
        self.require_phase(GamePhase::Setup)?;
        self.roster.toggle_eligibility(id)
    }

    pub fn set_eligibility(&mut self, id: ParticipantId, eligible: bool) -> Result<()> {
        self.require_phase(GamePhase::Setup)?;
        self.roster.set_eligibility(id, eligible)
    }

    /// Freeze the roster, build the gift pool and hand the first turn to the host.
    pub fn start(&mut self) -> Result<()> {
        self.require_phase(GamePhase::Setup)?;

        let eligible = self.roster.eligible_count();
        self.gifts = compute_gift_pool(eligible, self.config.host_gift_id);
        self.history.clear();
        self.last_gift = None;
        self.current_drawer = Some(ParticipantId::Host);
        self.phase = GamePhase::Playing;

        tracing::info!(
            "Game started with {} participants, host opens with gift {}",
            eligible,
            self.config.host_gift_id
        );
        Ok(())
    }

    /// Give `gift_id` to the current drawer and move the turn on.
    ///
    /// Nothing is modified when an error is returned.
    pub fn apply_draw(&mut self, gift_id: GiftId) -> Result<DrawOutcome> {
        self.require_phase(GamePhase::Playing)?;

        let drawer_id = self.current_drawer.ok_or(DrawError::NoCurrentDrawer)?;

        let gift_index = self
            .gifts
            .iter()
            .position(|g| g.id() == gift_id && !g.is_taken())
            .ok_or(DrawError::GiftUnavailable(gift_id))?;

        if self.is_host_opening() && gift_id != self.config.host_gift_id {
            return Err(DrawError::HostGiftRequired {
                expected: self.config.host_gift_id,
                got: gift_id,
            });
        }

        let drawer = self
            .roster
            .get_mut(drawer_id)
            .ok_or(DrawError::UnknownParticipant(drawer_id))?;
        drawer.record_draw(gift_id);
        let record = HistoryItem::new(drawer_id, drawer.name(), gift_id);

        self.gifts[gift_index].take(drawer_id);
        self.history.push(record.clone());
        self.last_gift = Some(gift_id);

        tracing::info!("{} drew gift {}", record.drawer_name, gift_id);

        let next_drawer = self.roster.find_next_eligible_drawer(gift_id);
        match next_drawer {
            Some(next) => self.current_drawer = Some(next),
            None => {
                self.current_drawer = None;
                self.phase = GamePhase::Finished;
                tracing::info!("All {} draws done, game finished", self.history.len());
            }
        }

        self.debug_check_invariants();

        Ok(DrawOutcome {
            record,
            next_drawer,
        })
    }

    /// Pick the gift the presentation layer should commit next.
    ///
    /// The host's opening draw is pinned to the reserved gift; every other
    /// draw is a uniform pick among untaken gifts.
    pub fn resolve_gift<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<GiftId> {
        if self.phase != GamePhase::Playing || self.current_drawer.is_none() {
            return None;
        }

        if self.is_host_opening() {
            let reserved = self.config.host_gift_id;
            return self
                .gifts
                .iter()
                .any(|g| g.id() == reserved && !g.is_taken())
                .then_some(reserved);
        }

        self.available_gifts().choose(rng).copied()
    }

    /// Back to setup. Eligibility choices survive the reset.
    pub fn reset(&mut self) {
        self.roster.clear_draws();
        self.gifts.clear();
        self.history.clear();
        self.current_drawer = None;
        self.last_gift = None;
        self.phase = GamePhase::Setup;

        tracing::info!("Game reset, {} participants opted in", self.roster.eligible_count());
    }

    pub fn summary(&self) -> SessionSummary {
        let current = self.current_drawer;
        SessionSummary {
            phase: self.phase,
            roster_size: self.roster.roster_size(),
            eligible_count: self.roster.eligible_count(),
            gifts_total: self.gifts.len(),
            gifts_remaining: self.gifts.iter().filter(|g| !g.is_taken()).count(),
            draws: self.history.len(),
            current_drawer: current,
            current_drawer_name: current
                .and_then(|id| self.roster.get(id))
                .map(|p| p.name().to_string()),
            last_gift: self.last_gift,
        }
    }

    fn require_phase(&self, expected: GamePhase) -> Result<()> {
        if self.phase != expected {
            return Err(DrawError::wrong_phase(expected, self.phase));
        }
        Ok(())
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        for p in self.roster.participants() {
            debug_assert_eq!(p.has_drawn(), p.gift_received().is_some());
            if let Some(gift_id) = p.gift_received() {
                let owner = self.gifts.iter().find(|g| g.id() == gift_id).and_then(Gift::owner);
                debug_assert_eq!(owner, Some(p.id()), "gift {} owner mismatch", gift_id);
            }
        }
        debug_assert_eq!(
            self.gifts.iter().filter(|g| g.is_taken()).count(),
            self.history.len()
        );
    }
}

/// Session snapshot for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub phase: GamePhase,
    pub roster_size: u32,
    pub eligible_count: usize,
    pub gifts_total: usize,
    pub gifts_remaining: usize,
    pub draws: usize,
    pub current_drawer: Option<ParticipantId>,
    pub current_drawer_name: Option<String>,
    pub last_gift: Option<GiftId>,
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
