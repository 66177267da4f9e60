//! Per-item hover debouncing.
//!
//! Each rendered item is either idle or has one pending dwell timer. The
//! timer is a start instant checked on every UI tick, the same way search
//! debouncing is polled elsewhere in the event loop.
//!
//! ```text
//! Idle --enter--> Pending(since) --dwell elapsed--> fire, Idle
//!                 Pending(since) --leave--> Idle
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Pending {
        since: Instant,
    },
}

#[derive(Debug, Clone)]
pub struct HoverDebouncer {
    dwell: Duration,
    states: Vec<HoverState>,
}

impl HoverDebouncer {
    pub fn new(dwell: Duration) -> Self {
        Self {
            dwell,
            states: Vec::new(),
        }
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Track `len` freshly rendered items. Pending timers are dropped.
    pub fn reset(&mut self, len: usize) {
        self.states = vec![HoverState::Idle; len];
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<HoverState> {
        self.states.get(index).copied()
    }

    /// Start the dwell timer for `index`.
    ///
    /// An item that is already pending keeps its original start, so there is
    /// never more than one timer per item. Returns true if a timer started.
    pub fn pointer_enter(&mut self, index: usize, now: Instant) -> bool {
        match self.states.get_mut(index) {
            Some(state @ HoverState::Idle) => {
                *state = HoverState::Pending { since: now };
                true
            }
            _ => false,
        }
    }

    /// Cancel the dwell timer for `index`. Returns true if one was pending.
    pub fn pointer_leave(&mut self, index: usize) -> bool {
        match self.states.get_mut(index) {
            Some(state @ HoverState::Pending { .. }) => {
                *state = HoverState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Items whose dwell has elapsed at `now`. They return to idle.
    pub fn poll(&mut self, now: Instant) -> Vec<usize> {
        let dwell = self.dwell;
        let mut fired = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            if let HoverState::Pending { since } = *state {
                if now.saturating_duration_since(since) >= dwell {
                    *state = HoverState::Idle;
                    fired.push(index);
                }
            }
        }
        fired
    }

    /// Earliest instant at which [`poll`](Self::poll) will fire something.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.states
            .iter()
            .filter_map(|state| match state {
                HoverState::Pending { since } => Some(*since + self.dwell),
                HoverState::Idle => None,
            })
            .min()
    }
}
