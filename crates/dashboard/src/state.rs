use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use salesdash_products::Catalog;
use salesdash_sales::CategoryFilter;

/// Dashboard view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTab {
    /// Product card grid.
    #[default]
    Products,
    /// Monthly revenue lines + revenue share.
    Charts,
    /// Tabular listing.
    Table,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Products, ActiveTab::Charts, ActiveTab::Table];

    /// Stable identifier (`"products"`, `"charts"`, `"table"`).
    pub fn id(self) -> &'static str {
        match self {
            ActiveTab::Products => "products",
            ActiveTab::Charts => "charts",
            ActiveTab::Table => "table",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Products => "Produits",
            ActiveTab::Charts => "Graphiques",
            ActiveTab::Table => "Tableau",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tab `{0}`; expected products|charts|table")]
pub struct UnknownTab(pub String);

impl FromStr for ActiveTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl core::fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.id())
    }
}

/// Everything the dashboard remembers between interactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub data: Catalog,
    pub selected_category: CategoryFilter,
    pub active_tab: ActiveTab,
}

impl DashboardState {
    pub fn new(data: Catalog) -> Self {
        Self {
            data,
            selected_category: CategoryFilter::All,
            active_tab: ActiveTab::Products,
        }
    }
}

/// Seed catalog, all categories, product grid.
impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}
