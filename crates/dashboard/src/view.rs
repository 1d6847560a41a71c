//! Presentation payload derived from dashboard state.

use serde::Serialize;

use salesdash_sales::{
    ALL_CATEGORIES, CatalogTotals, CategoryFilter, MonthlyRevenue, ProductSummary, RevenueShare,
    SalesReport,
};

use crate::state::{ActiveTab, DashboardState};

/// Series colors, cycled by position.
pub const PALETTE: [&str; 6] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899"];

const ALL_CATEGORIES_LABEL: &str = "Toutes les catégories";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// One line of the monthly revenue chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: &'static str,
}

/// Everything needed to render the dashboard for one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selected_category: CategoryFilter,
    pub active_tab: ActiveTab,
    pub categories: Vec<CategoryOption>,
    /// Catalog-wide, unaffected by the category filter.
    pub totals: CatalogTotals,
    /// Filtered products, for the card grid and the table.
    pub products: Vec<ProductSummary>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub chart_series: Vec<ChartSeries>,
    /// Catalog-wide, unaffected by the category filter.
    pub revenue_share: Vec<RevenueShare>,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let report = SalesReport::build(state.data.products(), &state.selected_category);

        let categories = report
            .categories
            .into_iter()
            .map(|value| {
                let label = if value == ALL_CATEGORIES {
                    ALL_CATEGORIES_LABEL.to_string()
                } else {
                    value.clone()
                };
                CategoryOption { value, label }
            })
            .collect();

        let chart_series = report
            .products
            .iter()
            .enumerate()
            .map(|(idx, p)| ChartSeries {
                name: p.name.clone(),
                color: palette_color(idx),
            })
            .collect();

        Self {
            selected_category: report.filter,
            active_tab: state.active_tab,
            categories,
            totals: report.totals,
            products: report.products,
            monthly_revenue: report.monthly_revenue,
            chart_series,
            revenue_share: report.revenue_share,
        }
    }
}
