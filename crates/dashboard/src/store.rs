//! Single owner of dashboard state, with pub/sub change notification.
//!
//! - No IO / no async
//! - Every applied change is published, in order, to each live subscriber
//! - Actions that leave the state unchanged publish nothing
//! - Readers only ever see clones; the state is mutated solely by `dispatch`

use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, TryRecvError};
use std::sync::{Mutex, RwLock};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use salesdash_products::Catalog;
use salesdash_sales::CategoryFilter;

use crate::action::{DashboardAction, reduce};
use crate::state::{ActiveTab, DashboardState};
use crate::view::DashboardView;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A previous holder of the state lock panicked.
    #[error("dashboard state lock poisoned")]
    Poisoned,
}

/// Receiving end of the store's change feed.
///
/// Each subscription gets its own copy of every published state. Intended for
/// one consumer thread.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next state is published.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Everything published so far that has not been received yet.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

#[derive(Debug)]
pub struct DashboardStore {
    state: RwLock<DashboardState>,
    subscribers: Mutex<Vec<mpsc::Sender<DashboardState>>>,
}

impl DashboardStore {
    pub fn new(initial: DashboardState) -> Self {
        Self {
            state: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Store over `data` with the default selection.
    pub fn with_catalog(data: Catalog) -> Self {
        Self::new(DashboardState::new(data))
    }

    /// Apply `action`. Returns whether the state changed.
    pub fn dispatch(&self, action: DashboardAction) -> Result<bool, StoreError> {
        let name = action.name();
        let mut state = self.state.write().map_err(|_| StoreError::Poisoned)?;

        let next = reduce(&state, action);
        if next == *state {
            debug!(action = name, "dashboard action left state unchanged");
            return Ok(false);
        }
        *state = next;

        debug!(
            action = name,
            category = %state.selected_category,
            tab = %state.active_tab,
            products = state.data.len(),
            "dashboard action applied"
        );

        // Published while the state lock is held so subscribers see changes in
        // the order they were applied.
        self.publish(&state)?;
        Ok(true)
    }

    pub fn set_selected_category(&self, category: impl Into<CategoryFilter>) -> Result<bool, StoreError> {
        self.dispatch(DashboardAction::SetSelectedCategory(category.into()))
    }

    pub fn set_active_tab(&self, tab: ActiveTab) -> Result<bool, StoreError> {
        self.dispatch(DashboardAction::SetActiveTab(tab))
    }

    pub fn set_data(&self, data: Catalog) -> Result<bool, StoreError> {
        self.dispatch(DashboardAction::SetData(data))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> Result<DashboardState, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(state.clone())
    }

    /// Derived views for the current state, recomputed on every call.
    pub fn view(&self) -> Result<DashboardView, StoreError> {
        let state = self.state.read().map_err(|_| StoreError::Poisoned)?;
        Ok(DashboardView::from_state(&state))
    }

    pub fn subscribe(&self) -> Subscription<DashboardState> {
        let (tx, rx) = mpsc::channel();

        // A poisoned subscriber list still hands out a subscription; it just
        // never receives anything.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }

    fn publish(&self, state: &DashboardState) -> Result<(), StoreError> {
        let mut subs = self.subscribers.lock().map_err(|_| StoreError::Poisoned)?;

        // Drop subscribers whose receiver is gone.
        subs.retain(|tx| tx.send(state.clone()).is_ok());

        Ok(())
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DashboardState::default())
    }
}
