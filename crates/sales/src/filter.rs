//! Category selection and filtering.

use serde::{Deserialize, Serialize};

use salesdash_products::Product;

/// Sentinel category value meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Which products a view should show.
///
/// Serialized as a plain string: `"all"` or the category value. Matching is
/// exact (case-sensitive, no trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Parse a selector value; `"all"` maps to [`CategoryFilter::All`].
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => product.category() == category,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value)
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Category(category) => category,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products matching `filter`, in their original relative order.
///
/// `All` yields every product; an unknown category yields an empty list.
pub fn filter_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    filter: &CategoryFilter,
) -> Vec<&'a Product> {
    products.into_iter().filter(|p| filter.matches(p)).collect()
}

/// [`filter_by_category`] for a raw selector string.
pub fn filter_by_category_str<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    selected_category: &str,
) -> Vec<&'a Product> {
    filter_by_category(products, &CategoryFilter::parse(selected_category))
}

/// `"all"` followed by each category in order of first appearance.
pub fn distinct_categories<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        // Catalogs hold tens of products; a linear scan keeps first-seen order.
        if !categories[1..].iter().any(|c| c == product.category()) {
            categories.push(product.category().to_string());
        }
    }
    categories
}
