use crate::{DrawError, DrawOutcome, DrawSession, GiftId, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// A session shared between a UI loop and its timers.
///
/// Every mutation holds the lock for its whole transition, so a draw is never
/// interleaved with another state change.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<DrawSession>>,
}

impl SharedSession {
    pub fn new(session: DrawSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Commit a draw, refusing if another mutation is in flight.
    pub fn try_apply_draw(&self, gift_id: GiftId) -> Result<DrawOutcome> {
        let mut session = self.inner.try_lock().ok_or(DrawError::DrawInProgress)?;
        session.apply_draw(gift_id)
    }

    /// Commit a draw, waiting for any in-flight mutation first.
    pub fn apply_draw(&self, gift_id: GiftId) -> Result<DrawOutcome> {
        self.inner.lock().apply_draw(gift_id)
    }

    pub fn start(&self) -> Result<()> {
        self.inner.lock().start()
    }

    pub fn reset(&self) {
        self.inner.lock().reset()
    }

    pub fn with<T>(&self, f: impl FnOnce(&DrawSession) -> T) -> T {
        f(&self.inner.lock())
    }

    pub fn with_mut<T>(&self, f: impl FnOnce(&mut DrawSession) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
