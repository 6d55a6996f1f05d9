//! Tab panel state machine.
//!
//! DESIGN
//! ======
//! Exactly one panel is active. Selecting another starts a transition: the
//! target is `Entering`, the current panel `Exiting`. The transition ends only
//! when `complete` is called with its token, so a completion scheduled for an
//! older transition can never finish a newer one. While a transition is in
//! flight further selections are dropped, not queued.
//!
//! Timing lives in `navigator`; this module has no clock.

pub mod navigator;

use tracing::debug;

pub use navigator::{DEFAULT_SETTLE_MS, TabNavigator, TabSnapshot};

/// Panel ids of the booking page, in tab order.
pub const DEFAULT_PANELS: [&str; 4] = ["flights", "flight-hotel", "car-rent", "hotel"];

/// Identifies one transition. Strictly increasing per controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionToken(u64);

impl TransitionToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Inactive,
    Entering,
    Active,
    Exiting,
}

/// Outcome of a selection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A transition started; complete it with this token.
    Started(TransitionToken),
    /// The panel is already active.
    AlreadyActive,
    /// Another transition is in flight; the request was dropped.
    Busy,
    /// No panel at that index; nothing to animate.
    UnknownPanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    token: TransitionToken,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct TabController {
    panels: Vec<String>,
    active: usize,
    pending: Option<Transition>,
    last_token: u64,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(DEFAULT_PANELS.iter().map(|p| (*p).to_owned()).collect())
    }
}

impl TabController {
    /// Controller over `panels` with the first one active.
    #[must_use]
    pub fn new(panels: Vec<String>) -> Self {
        Self { panels, active: 0, pending: None, last_token: 0 }
    }

    #[must_use]
    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.panels.get(self.active).map(String::as_str)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Target of the in-flight transition, if any.
    #[must_use]
    pub fn pending_index(&self) -> Option<usize> {
        self.pending.map(|t| t.to)
    }

    #[must_use]
    pub fn pending_token(&self) -> Option<TransitionToken> {
        self.pending.map(|t| t.token)
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> PanelPhase {
        match self.pending {
            Some(t) if t.to == index => PanelPhase::Entering,
            Some(t) if t.from == index => PanelPhase::Exiting,
            _ if index == self.active && index < self.panels.len() => PanelPhase::Active,
            _ => PanelPhase::Inactive,
        }
    }

    pub fn select_panel(&mut self, index: usize) -> Selection {
        if index >= self.panels.len() {
            debug!(index, panels = self.panels.len(), "unknown panel; nothing to animate");
            return Selection::UnknownPanel;
        }
        if let Some(t) = self.pending {
            debug!(index, pending = t.to, token = t.token.0, "transition in flight; selection dropped");
            return Selection::Busy;
        }
        if index == self.active {
            return Selection::AlreadyActive;
        }

        self.last_token += 1;
        let token = TransitionToken(self.last_token);
        self.pending = Some(Transition { token, from: self.active, to: index });
        debug!(from = self.active, to = index, token = token.0, "panel transition started");
        Selection::Started(token)
    }

    /// Finish the transition `token` started. Returns `false` for stale tokens.
    pub fn complete(&mut self, token: TransitionToken) -> bool {
        match self.pending {
            Some(t) if t.token == token => {
                self.active = t.to;
                self.pending = None;
                debug!(active = self.active, token = token.0, "panel transition completed");
                true
            }
            _ => {
                debug!(token = token.0, "stale transition completion ignored");
                false
            }
        }
    }

    /// Abandon the transition `token` started; the old panel stays active.
    pub fn cancel(&mut self, token: TransitionToken) -> bool {
        match self.pending {
            Some(t) if t.token == token => {
                self.pending = None;
                debug!(active = self.active, token = token.0, "panel transition cancelled");
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
