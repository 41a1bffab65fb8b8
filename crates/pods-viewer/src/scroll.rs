//! Page scroll suspension while an overlay is open.
//!
//! Each open overlay holds a [`ScrollGuard`]. The page is locked while at
//! least one guard is alive and unlocked when the last one drops, on every
//! exit path including unmount and panics unwinding through the owner.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// The page whose scrolling is suspended.
pub trait ScrollTarget: Send {
    fn lock(&mut self);
    fn unlock(&mut self);
}

struct LockState {
    holders: usize,
    target: Box<dyn ScrollTarget>,
}

/// Reference-counted scroll lock shared by all overlays on a page.
#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<Mutex<LockState>>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders())
            .finish()
    }
}

impl ScrollLock {
    pub fn new(target: impl ScrollTarget + 'static) -> Self {
        Self {
            state: Arc::new(Mutex::new(LockState {
                holders: 0,
                target: Box::new(target),
            })),
        }
    }

    // A panic while holding the mutex leaves the count intact, so poisoning
    // is safe to ignore.
    fn state(&self) -> MutexGuard<'_, LockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Suspend scrolling until the returned guard drops.
    pub fn acquire(&self) -> ScrollGuard {
        let mut state = self.state();
        if state.holders == 0 {
            state.target.lock();
        }
        state.holders += 1;
        ScrollGuard {
            lock: self.clone(),
        }
    }

    pub fn holders(&self) -> usize {
        self.state().holders
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    fn release(&self) {
        let mut state = self.state();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            state.target.unlock();
        }
    }
}

/// Keeps the page locked while alive.
#[must_use = "scrolling resumes as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollGuard {
    lock: ScrollLock,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}
