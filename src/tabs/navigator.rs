//! Timed panel transitions on the tokio runtime.
//!
//! DESIGN
//! ======
//! `select_panel` starts a transition on the shared controller and spawns a
//! task that sleeps for the settle delay, then completes the transition by
//! token. The task handle is kept so `cancel_pending` can abort it. A
//! completion that arrives for an older token is ignored by the controller.
//!
//! Must be used from within a tokio runtime.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use super::{Selection, TabController, TransitionToken};

/// Crossfade duration of the booking page.
pub const DEFAULT_SETTLE_MS: u64 = 600;

/// Point-in-time view of the navigator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSnapshot {
    pub active: usize,
    pub transitioning: bool,
    pub pending: Option<usize>,
}

struct NavigatorInner {
    controller: TabController,
    timer: Option<(TransitionToken, JoinHandle<()>)>,
}

#[derive(Clone)]
pub struct TabNavigator {
    inner: Arc<Mutex<NavigatorInner>>,
    settle: Duration,
}

impl TabNavigator {
    #[must_use]
    pub fn new(controller: TabController, settle: Duration) -> Self {
        Self { inner: Arc::new(Mutex::new(NavigatorInner { controller, timer: None })), settle }
    }

    #[must_use]
    pub fn settle(&self) -> Duration {
        self.settle
    }

    /// Request a switch to `index`; schedules completion after the settle delay.
    pub fn select_panel(&self, index: usize) -> Selection {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let selection = inner.controller.select_panel(index);

        if let Selection::Started(token) = selection {
            let shared = Arc::clone(&self.inner);
            let settle = self.settle;
            let handle = tokio::spawn(async move {
                tokio::time::sleep(settle).await;
                finish(&shared, token);
            });
            inner.timer = Some((token, handle));
        }

        selection
    }

    /// Abort the in-flight transition, keeping the old panel active.
    pub fn cancel_pending(&self) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let Some((token, handle)) = inner.timer.take() else {
            return false;
        };
        handle.abort();
        inner.controller.cancel(token)
    }

    #[must_use]
    pub fn snapshot(&self) -> TabSnapshot {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        TabSnapshot {
            active: inner.controller.active_index(),
            transitioning: inner.controller.is_transitioning(),
            pending: inner.controller.pending_index(),
        }
    }

    /// Run `f` against the controller under the lock.
    pub fn with_controller<T>(&self, f: impl FnOnce(&TabController) -> T) -> T {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&inner.controller)
    }
}

fn finish(shared: &Mutex<NavigatorInner>, token: TransitionToken) {
    let mut inner = shared.lock().unwrap_or_else(PoisonError::into_inner);
    if inner.timer.as_ref().is_some_and(|(t, _)| *t == token) {
        inner.timer = None;
    }
    if inner.controller.complete(token) {
        info!(
            active = inner.controller.active_index(),
            panel = inner.controller.active_panel().unwrap_or_default(),
            "panel active"
        );
    }
}

#[cfg(test)]
#[path = "navigator_test.rs"]
mod tests;
