//! Sales reporting engine.
//!
//! Pure functions that turn a product catalog plus a category filter into the
//! figures a dashboard shows: per-product totals, the filtered product list,
//! a month-indexed revenue pivot, a revenue-share breakdown and catalog-wide
//! totals. Nothing here owns state or performs IO, so every function can be
//! called from any thread, as often as needed.

pub mod filter;
pub mod pivot;
pub mod report;

pub use filter::{ALL_CATEGORIES, CategoryFilter, distinct_categories, filter_by_category, filter_by_category_str};
pub use pivot::{MonthlyRevenue, monthly_revenue_pivot};
pub use report::{
    CatalogTotals, ProductSummary, RevenueShare, SalesReport, catalog_totals, product_summaries,
    product_summary, revenue_share_breakdown, total_revenue, total_units,
};
