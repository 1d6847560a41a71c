use serde::{Deserialize, Serialize};
use tracing::warn;

use salesdash_core::{DomainError, DomainResult, Entity, ProductReference, ValueObject};

use crate::month::{MONTHS_PER_YEAR, Month};

/// How strictly raw records are checked when building products.
///
/// Both policies reject blank references and negative or non-finite prices.
/// They differ on the shape of the sales series and on duplicate references.
///
/// A policy applies to records that parsed. `reference`, `name`,
/// `unit_price` and `category` are required by the record format, so a
/// missing one fails the whole document under either policy. A missing
/// `image_path` is empty and a missing `monthly_sales` is an empty series,
/// which Permissive zero-fills and Strict rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Zero-fill short series, truncate long ones, accept duplicate references.
    #[default]
    Permissive,
    /// Reject any series that is not exactly twelve entries long and any
    /// duplicate reference.
    Strict,
}

/// Unit sales for January..December of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySales([u64; MONTHS_PER_YEAR]);

impl ValueObject for MonthlySales {}

impl MonthlySales {
    pub fn new(units: [u64; MONTHS_PER_YEAR]) -> Self {
        Self(units)
    }

    /// Exact conversion: `None` unless `units` has twelve entries.
    pub fn try_from_slice(units: &[u64]) -> Option<Self> {
        let array: [u64; MONTHS_PER_YEAR] = units.try_into().ok()?;
        Some(Self(array))
    }

    /// Lenient conversion: missing months count as zero, extra entries are dropped.
    pub fn from_slice_padded(units: &[u64]) -> Self {
        let mut array = [0u64; MONTHS_PER_YEAR];
        for (slot, value) in array.iter_mut().zip(units) {
            *slot = *value;
        }
        Self(array)
    }

    pub fn get(&self, month: Month) -> u64 {
        self.0[month.index()]
    }

    pub fn as_array(&self) -> &[u64; MONTHS_PER_YEAR] {
        &self.0
    }

    /// `(month, units)` pairs in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, u64)> + '_ {
        Month::ALL.iter().map(move |m| (*m, self.0[m.index()]))
    }

    /// Sum over the twelve months, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, units| acc.saturating_add(*units))
    }
}

impl From<[u64; MONTHS_PER_YEAR]> for MonthlySales {
    fn from(value: [u64; MONTHS_PER_YEAR]) -> Self {
        Self(value)
    }
}

/// Raw product record as found in catalog files.
///
/// Accepts the English field names as well as the French ones used by the
/// sample data (`nom`, `prix`, `image`, `categorie`,
/// `ventes_mensuelles`). Only `image_path` and `monthly_sales` may be
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub reference: String,
    #[serde(alias = "nom")]
    pub name: String,
    #[serde(alias = "prix", alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(alias = "image", alias = "imagePath", default)]
    pub image_path: String,
    #[serde(alias = "categorie")]
    pub category: String,
    #[serde(alias = "ventes_mensuelles", alias = "monthlySales", default)]
    pub monthly_sales: Vec<u64>,
}

/// Immutable catalog entry: identity, price, grouping and sales history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub(crate) reference: ProductReference,
    pub(crate) name: String,
    pub(crate) unit_price: f64,
    pub(crate) image_path: String,
    pub(crate) category: String,
    pub(crate) monthly_sales: MonthlySales,
}

impl Product {
    /// Build a product, rejecting negative or non-finite prices.
    pub fn new(
        reference: ProductReference,
        name: impl Into<String>,
        unit_price: f64,
        image_path: impl Into<String>,
        category: impl Into<String>,
        monthly_sales: MonthlySales,
    ) -> DomainResult<Self> {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(DomainError::invalid_price(reference.as_str(), unit_price));
        }

        Ok(Self {
            reference,
            name: name.into(),
            unit_price,
            image_path: image_path.into(),
            category: category.into(),
            monthly_sales,
        })
    }

    /// Convert a raw record under the given policy.
    pub fn try_from_record(record: ProductRecord, policy: ValidationPolicy) -> DomainResult<Self> {
        let reference = ProductReference::new(record.reference)?;
        let len = record.monthly_sales.len();

        let monthly_sales = match policy {
            ValidationPolicy::Strict => MonthlySales::try_from_slice(&record.monthly_sales)
                .ok_or_else(|| DomainError::malformed_product(reference.as_str(), len))?,
            ValidationPolicy::Permissive => {
                if len != MONTHS_PER_YEAR {
                    warn!(
                        reference = %reference,
                        len,
                        "monthly sales series coerced to {} entries",
                        MONTHS_PER_YEAR
                    );
                }
                MonthlySales::from_slice_padded(&record.monthly_sales)
            }
        };

        Self::new(
            reference,
            record.name,
            record.unit_price,
            record.image_path,
            record.category,
            monthly_sales,
        )
    }

    pub fn reference(&self) -> &ProductReference {
        &self.reference
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn monthly_sales(&self) -> &MonthlySales {
        &self.monthly_sales
    }
}

impl Entity for Product {
    type Id = ProductReference;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            reference: product.reference.to_string(),
            name: product.name.clone(),
            unit_price: product.unit_price,
            image_path: product.image_path.clone(),
            category: product.category.clone(),
            monthly_sales: product.monthly_sales.as_array().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(sales: Vec<u64>) -> ProductRecord {
        ProductRecord {
            reference: "P001".to_string(),
            name: "Laptop".to_string(),
            unit_price: 100.0,
            image_path: "./images/laptop.jpg".to_string(),
            category: "A".to_string(),
            monthly_sales: sales,
        }
    }

    #[test]
    fn strict_accepts_twelve_months() {
        let product =
            Product::try_from_record(record((1..=12).collect()), ValidationPolicy::Strict).unwrap();
        assert_eq!(product.monthly_sales().total(), 78);
        assert_eq!(product.monthly_sales().get(Month::Dec), 12);
        assert_eq!(product.id().as_str(), "P001");
    }

    #[test]
    fn strict_rejects_short_series() {
        let err = Product::try_from_record(record(vec![1, 2, 3]), ValidationPolicy::Strict)
            .unwrap_err();
        assert_eq!(err, DomainError::malformed_product("P001", 3));
    }

    #[test]
    fn permissive_zero_fills_short_series() {
        let product =
            Product::try_from_record(record(vec![5, 6]), ValidationPolicy::Permissive).unwrap();
        assert_eq!(product.monthly_sales().get(Month::Jan), 5);
        assert_eq!(product.monthly_sales().get(Month::Feb), 6);
        assert_eq!(product.monthly_sales().get(Month::Mar), 0);
        assert_eq!(product.monthly_sales().total(), 11);
    }

    #[test]
    fn permissive_truncates_long_series() {
        let product =
            Product::try_from_record(record((1..=14).collect()), ValidationPolicy::Permissive)
                .unwrap();
        assert_eq!(product.monthly_sales().total(), 78);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let mut units = [0u64; MONTHS_PER_YEAR];
        units[0] = u64::MAX;
        units[1] = 1;
        assert_eq!(MonthlySales::new(units).total(), u64::MAX);
    }

    #[test]
    fn negative_price_is_rejected_under_both_policies() {
        for policy in [ValidationPolicy::Strict, ValidationPolicy::Permissive] {
            let mut raw = record((1..=12).collect());
            raw.unit_price = -1.0;
            let err = Product::try_from_record(raw, policy).unwrap_err();
            assert!(matches!(err, DomainError::InvalidPrice { .. }));
        }
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let mut raw = record((1..=12).collect());
        raw.unit_price = f64::NAN;
        assert!(Product::try_from_record(raw, ValidationPolicy::Permissive).is_err());
    }

    #[test]
    fn blank_reference_is_rejected() {
        let mut raw = record((1..=12).collect());
        raw.reference = " ".to_string();
        let err = Product::try_from_record(raw, ValidationPolicy::Permissive).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn record_accepts_french_field_names() {
        let json = r#"{
            "reference": "P003",
            "nom": "Casque Audio",
            "prix": 1500,
            "image": "./images/headphone.jpg",
            "categorie": "Accessoires",
            "ventes_mensuelles": [12, 18, 15, 20, 22, 30, 35, 40, 42, 38, 50, 55]
        }"#;
        let raw: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name, "Casque Audio");
        assert_eq!(raw.unit_price, 1500.0);
        assert_eq!(raw.category, "Accessoires");
        assert_eq!(raw.monthly_sales.len(), 12);
    }

    #[test]
    fn product_converts_back_to_record() {
        let raw = record((1..=12).collect());
        let product = Product::try_from_record(raw.clone(), ValidationPolicy::Strict).unwrap();
        assert_eq!(ProductRecord::from(&product), raw);
    }

    proptest! {
        /// Property: padding keeps the first twelve entries and zero-fills the rest.
        #[test]
        fn padded_series_keeps_leading_months(units in prop::collection::vec(0u64..10_000, 0..20)) {
            let sales = MonthlySales::from_slice_padded(&units);
            for month in Month::ALL {
                let expected = units.get(month.index()).copied().unwrap_or(0);
                prop_assert_eq!(sales.get(month), expected);
            }
            let kept: u64 = units.iter().take(MONTHS_PER_YEAR).sum();
            prop_assert_eq!(sales.total(), kept);
        }

        /// Property: strict conversion succeeds exactly for twelve-entry series.
        #[test]
        fn strict_accepts_only_twelve_entries(units in prop::collection::vec(0u64..10_000, 0..20)) {
            let result = Product::try_from_record(record(units.clone()), ValidationPolicy::Strict);
            prop_assert_eq!(result.is_ok(), units.len() == MONTHS_PER_YEAR);
        }
    }
}
