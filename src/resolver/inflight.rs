//! Per-pair single-flight locks.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OwnedMutexGuard;

type Slot = Arc<tokio::sync::Mutex<()>>;

/// Serializes work on the same pair key while leaving other keys independent.
///
/// A slot exists only while someone holds or awaits it.
#[derive(Clone, Default)]
pub struct InFlight {
    slots: Arc<Mutex<HashMap<[u8; 32], Slot>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other holder of `key` remains, then holds it.
    pub async fn acquire(&self, key: [u8; 32]) -> InFlightGuard {
        let slot = {
            let mut slots = self.slots.lock();
            Arc::clone(slots.entry(key).or_default())
        };

        let guard = slot.lock_owned().await;

        InFlightGuard {
            key,
            slots: Arc::clone(&self.slots),
            guard: Some(guard),
        }
    }

    /// Number of keys currently held or awaited.
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl std::fmt::Debug for InFlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlight")
            .field("keys", &self.len())
            .finish()
    }
}

/// Held for the duration of one pair's generation.
pub struct InFlightGuard {
    key: [u8; 32],
    slots: Arc<Mutex<HashMap<[u8; 32], Slot>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        // Slots are cloned under this lock, so a count of one means only the
        // map still refers to it.
        let mut slots = self.slots.lock();
        let idle = slots
            .get(&self.key)
            .is_some_and(|slot| Arc::strong_count(slot) == 1);
        if idle {
            slots.remove(&self.key);
        }
    }
}
