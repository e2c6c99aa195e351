//! Application state store
//!
//! Owns the [`AppState`] snapshot and drives the dispatch cycle:
//! effect, then reducer, then synchronous subscriber notification, then
//! any follow-up action through the same full cycle.
//!
//! The store is a plain value with a single owner, constructed
//! explicitly and passed by reference to whoever needs it. `dispatch`
//! takes `&mut self`, which makes ordering and re-entrancy properties
//! structural: one action completes fully before the next is accepted,
//! and a subscriber cannot dispatch from inside its own notification.

use tracing::debug;

use crate::domain::AppState;

use super::action::Action;
use super::effects::ItemEffects;
use super::reducer::reduce;

/// Callback invoked with the new snapshot after every dispatch
pub type Subscriber = Box<dyn Fn(&AppState) + Send>;

/// Single source-of-truth state container
pub struct AppStore {
    state: AppState,
    effects: ItemEffects,
    subscribers: Vec<Subscriber>,
}

impl AppStore {
    /// Creates a store with the initial empty state
    pub fn new(effects: ItemEffects) -> Self {
        Self {
            state: AppState::new(),
            effects,
            subscribers: Vec::new(),
        }
    }

    /// Returns the current snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Registers a subscriber; it is invoked after every dispatch with
    /// the full new snapshot
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppState) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Dispatches an action through the full cycle
    ///
    /// Order: side effect first (persistence), then the pure reducer,
    /// then subscriber notification, then any follow-up action the
    /// effect produced (which runs the same full cycle).
    pub async fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching action");

        let follow_up = self.effects.run(&action).await;

        self.state = reduce(std::mem::take(&mut self.state), &action);
        for subscriber in &self.subscribers {
            subscriber(&self.state);
        }

        if let Some(next) = follow_up {
            Box::pin(self.dispatch(next)).await;
        }
    }
}
