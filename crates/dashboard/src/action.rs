//! State transitions (pure).

use salesdash_products::Catalog;
use salesdash_sales::CategoryFilter;

use crate::state::{ActiveTab, DashboardState};

/// The only ways dashboard state can change.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetSelectedCategory(CategoryFilter),
    SetActiveTab(ActiveTab),
    /// Replace the catalog wholesale.
    SetData(Catalog),
}

impl DashboardAction {
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::SetSelectedCategory(_) => "set_selected_category",
            DashboardAction::SetActiveTab(_) => "set_active_tab",
            DashboardAction::SetData(_) => "set_data",
        }
    }
}

/// Next state after `action`. The input state is left untouched.
pub fn reduce(state: &DashboardState, action: DashboardAction) -> DashboardState {
    let mut next = state.clone();
    match action {
        DashboardAction::SetSelectedCategory(category) => next.selected_category = category,
        DashboardAction::SetActiveTab(tab) => next.active_tab = tab,
        DashboardAction::SetData(data) => next.data = data,
    }
    next
}
