//! Per-product and catalog-wide aggregates.

use serde::Serialize;

use salesdash_core::ProductReference;
use salesdash_products::Product;

use crate::filter::{CategoryFilter, distinct_categories, filter_by_category};
use crate::pivot::{MonthlyRevenue, monthly_revenue_pivot};

/// Units sold over the whole year.
pub fn total_units(product: &Product) -> u64 {
    product.monthly_sales().total()
}

/// `total_units * unit_price`, unrounded.
pub fn total_revenue(product: &Product) -> f64 {
    total_units(product) as f64 * product.unit_price()
}

/// One product as shown on a card or a table row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub reference: ProductReference,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub image_path: String,
    pub total_units: u64,
    pub total_revenue: f64,
}

pub fn product_summary(product: &Product) -> ProductSummary {
    ProductSummary {
        reference: product.reference().clone(),
        name: product.name().to_string(),
        category: product.category().to_string(),
        unit_price: product.unit_price(),
        image_path: product.image_path().to_string(),
        total_units: total_units(product),
        total_revenue: total_revenue(product),
    }
}

pub fn product_summaries<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<ProductSummary> {
    products.into_iter().map(product_summary).collect()
}

/// A product's slice of the catalog-wide revenue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueShare {
    pub name: String,
    pub revenue: f64,
    /// Fraction of the catalog-wide revenue in `0.0..=1.0`; `0.0` when the
    /// catalog earned nothing.
    pub share: f64,
}

/// `(name, total revenue, share)` for every product passed in.
///
/// Callers pass the full catalog: this breakdown ignores the category filter.
pub fn revenue_share_breakdown<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<RevenueShare> {
    let mut breakdown: Vec<RevenueShare> = products
        .into_iter()
        .map(|p| RevenueShare {
            name: p.name().to_string(),
            revenue: total_revenue(p),
            share: 0.0,
        })
        .collect();

    let total: f64 = breakdown.iter().map(|s| s.revenue).sum();
    if total > 0.0 {
        for entry in &mut breakdown {
            entry.share = entry.revenue / total;
        }
    }
    breakdown
}

/// Figures shown on the dashboard's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CatalogTotals {
    pub total_revenue: f64,
    pub total_units: u64,
    pub product_count: usize,
}

/// Unit counts saturate at `u64::MAX`.
pub fn catalog_totals<'a>(products: impl IntoIterator<Item = &'a Product>) -> CatalogTotals {
    products
        .into_iter()
        .fold(CatalogTotals::default(), |acc, p| CatalogTotals {
            total_revenue: acc.total_revenue + total_revenue(p),
            total_units: acc.total_units.saturating_add(total_units(p)),
            product_count: acc.product_count + 1,
        })
}

/// Every derived view for one catalog and one category filter.
///
/// `products` and `monthly_revenue` follow the filter; `categories`,
/// `revenue_share` and `totals` always cover the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub filter: CategoryFilter,
    pub categories: Vec<String>,
    pub products: Vec<ProductSummary>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub revenue_share: Vec<RevenueShare>,
    pub totals: CatalogTotals,
}

impl SalesReport {
    pub fn build(catalog: &[Product], filter: &CategoryFilter) -> Self {
        let filtered = filter_by_category(catalog, filter);

        Self {
            filter: filter.clone(),
            categories: distinct_categories(catalog),
            products: product_summaries(filtered.iter().copied()),
            monthly_revenue: monthly_revenue_pivot(filtered.iter().copied()),
            revenue_share: revenue_share_breakdown(catalog),
            totals: catalog_totals(catalog),
        }
    }
}
