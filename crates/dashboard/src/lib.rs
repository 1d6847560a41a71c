//! Dashboard selection state and its store.
//!
//! The store is the only owner of the selected category, the active tab and
//! the catalog being reported on. Readers receive snapshots or derived views;
//! changes go through the named mutators, which dispatch actions to a pure
//! reducer and fan the new state out to subscribers.

pub mod action;
pub mod state;
pub mod store;
pub mod view;

pub use action::{DashboardAction, reduce};
pub use state::{ActiveTab, DashboardState, UnknownTab};
pub use store::{DashboardStore, StoreError, Subscription};
pub use view::{CategoryOption, ChartSeries, DashboardView, PALETTE, palette_color};
