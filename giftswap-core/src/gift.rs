use crate::ParticipantId;
use serde::{Deserialize, Serialize};

pub type GiftId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    id: GiftId,
    is_taken: bool,
    owner: Option<ParticipantId>,
}

impl Gift {
    pub fn new(id: GiftId) -> Self {
        Self {
            id,
            is_taken: false,
            owner: None,
        }
    }

    pub fn id(&self) -> GiftId {
        self.id
    }

    pub fn is_taken(&self) -> bool {
        self.is_taken
    }

    pub fn owner(&self) -> Option<ParticipantId> {
        self.owner
    }

    pub(crate) fn take(&mut self, owner: ParticipantId) {
        debug_assert!(!self.is_taken, "gift {} taken twice", self.id);
        self.is_taken = true;
        self.owner = Some(owner);
    }
}

/// Build the pool for `eligible_count` participants, numbered from 1.
///
/// When the pool is too small to contain `reserved_id` naturally, the highest
/// gift is renumbered to it so the host's opening draw always has a target.
pub fn compute_gift_pool(eligible_count: usize, reserved_id: GiftId) -> Vec<Gift> {
    let mut gifts: Vec<Gift> = (1..=eligible_count as GiftId).map(Gift::new).collect();

    if eligible_count < reserved_id as usize && !gifts.iter().any(|g| g.id == reserved_id) {
        if let Some(last) = gifts.last_mut() {
            last.id = reserved_id;
        }
    }

    gifts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(pool: &[Gift]) -> Vec<GiftId> {
        pool.iter().map(Gift::id).collect()
    }

    #[test]
    fn test_pool_is_sized_and_unique() {
        for count in 1..=60 {
            let pool = compute_gift_pool(count, 11);
            let unique: HashSet<GiftId> = pool.iter().map(Gift::id).collect();

            assert_eq!(pool.len(), count);
            assert_eq!(unique.len(), count);
            assert!(unique.contains(&11), "gift 11 missing for {} gifts", count);
            assert!(pool.iter().all(|g| !g.is_taken() && g.owner().is_none()));
        }
    }

    #[test]
    fn test_small_pool_reserves_last_slot() {
        assert_eq!(ids(&compute_gift_pool(4, 11)), vec![1, 2, 3, 11]);
        assert_eq!(ids(&compute_gift_pool(1, 11)), vec![11]);
    }

    #[test]
    fn test_large_pool_is_contiguous() {
        assert_eq!(ids(&compute_gift_pool(11, 11)), (1..=11).collect::<Vec<_>>());
        assert_eq!(ids(&compute_gift_pool(39, 11)), (1..=39).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_pool() {
        assert!(compute_gift_pool(0, 11).is_empty());
    }
}
