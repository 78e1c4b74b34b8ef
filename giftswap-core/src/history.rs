use crate::{GiftId, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed draw. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub drawer_id: ParticipantId,
    pub drawer_name: String,
    pub gift_id: GiftId,
    pub timestamp: DateTime<Utc>,
}

impl HistoryItem {
    pub fn new(drawer_id: ParticipantId, drawer_name: impl Into<String>, gift_id: GiftId) -> Self {
        Self {
            id: Uuid::new_v4(),
            drawer_id,
            drawer_name: drawer_name.into(),
            gift_id,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only draw log, read back newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn push(&mut self, item: HistoryItem) {
        self.items.push(item);
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    /// Most recent draw first.
    pub fn recent(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter().rev()
    }

    /// Draws in the order they happened.
    pub fn chronological(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_is_newest_first() {
        let mut history = History::new();
        history.push(HistoryItem::new(ParticipantId::Host, "Teacher", 11));
        history.push(HistoryItem::new(ParticipantId::Seat(11), "No. 11", 4));

        let recent: Vec<GiftId> = history.recent().map(|h| h.gift_id).collect();
        assert_eq!(recent, vec![4, 11]);
        assert_eq!(history.first().unwrap().drawer_id, ParticipantId::Host);
        assert_eq!(history.latest().unwrap().drawer_id, ParticipantId::Seat(11));
    }

    #[test]
    fn test_items_get_unique_ids() {
        let a = HistoryItem::new(ParticipantId::Seat(1), "No. 1", 1);
        let b = HistoryItem::new(ParticipantId::Seat(1), "No. 1", 1);
        assert_ne!(a.id, b.id);
        assert!(b.timestamp >= a.timestamp);
    }
}
