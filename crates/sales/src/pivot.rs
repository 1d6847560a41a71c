//! Month-indexed revenue pivot for time-series charts.

use serde::ser::{Serialize, SerializeMap, Serializer};

use salesdash_products::{Month, Product};

/// Revenue per product name for one calendar month.
///
/// Keys keep the order in which product names were first inserted. Inserting
/// an existing name replaces its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    month: Month,
    values: Vec<(String, f64)>,
}

impl MonthlyRevenue {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            values: Vec::new(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Set `name`'s revenue, overwriting any earlier value under the same name.
    pub fn insert(&mut self, name: &str, revenue: f64) {
        match self.values.iter_mut().find(|(key, _)| key == name) {
            Some((_, value)) => *value = revenue,
            None => self.values.push((name.to_string(), revenue)),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Chart-row shape: `{"month": "Jan", "<name>": <revenue>, ...}`.
impl Serialize for MonthlyRevenue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("month", self.month.label())?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Twelve rows, Jan..Dec, each mapping product name to
/// `monthly_sales[month] * unit_price`.
///
/// Products sharing a name collapse into one key; the later product wins.
pub fn monthly_revenue_pivot<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<MonthlyRevenue> {
    let mut rows: Vec<MonthlyRevenue> = Month::ALL.iter().map(|m| MonthlyRevenue::new(*m)).collect();
    for product in products {
        for (row, (_, units)) in rows.iter_mut().zip(product.monthly_sales().iter()) {
            row.insert(product.name(), units as f64 * product.unit_price());
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use salesdash_core::ProductReference;
    use salesdash_products::{Catalog, MonthlySales};

    fn product(reference: &str, name: &str, price: f64, sales: [u64; 12]) -> Product {
        Product::new(
            ProductReference::new(reference).unwrap(),
            name,
            price,
            "",
            "A",
            MonthlySales::new(sales),
        )
        .unwrap()
    }

    #[test]
    fn empty_catalog_yields_twelve_empty_rows() {
        let rows = monthly_revenue_pivot(&Catalog::empty());
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(MonthlyRevenue::is_empty));
        let months: Vec<Month> = rows.iter().map(MonthlyRevenue::month).collect();
        assert_eq!(months, Month::ALL);
    }

    #[test]
    fn revenue_is_units_times_price_per_month() {
        let p = product("P001", "Laptop", 100.0, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        let rows = monthly_revenue_pivot([&p]);
        assert_eq!(rows[Month::Jan.index()].get("Laptop"), Some(100.0));
        assert_eq!(rows[Month::Dec.index()].get("Laptop"), Some(1200.0));
    }

    #[test]
    fn duplicate_names_keep_the_later_product() {
        let first = product("P001", "Same", 1.0, [1; 12]);
        let second = product("P002", "Same", 2.0, [5; 12]);
        let other = product("P003", "Other", 1.0, [0; 12]);
        let rows = monthly_revenue_pivot([&first, &other, &second]);
        for row in &rows {
            assert_eq!(row.len(), 2);
            assert_eq!(row.get("Same"), Some(10.0));
            // first-inserted position is kept
            assert_eq!(row.iter().next().map(|(name, _)| name), Some("Same"));
        }
    }

    #[test]
    fn serializes_as_chart_row() {
        let p = product("P001", "Laptop", 2.0, [3; 12]);
        let rows = monthly_revenue_pivot([&p]);
        let json = serde_json::to_value(&rows[1]).unwrap();
        assert_eq!(json, serde_json::json!({ "month": "Feb", "Laptop": 6.0 }));
    }

    #[test]
    fn seed_pivot_matches_first_month() {
        let catalog = Catalog::seed();
        let rows = monthly_revenue_pivot(&catalog);
        assert_eq!(rows[0].get("Ordinateur Portable"), Some(120_000.0));
        assert_eq!(rows[0].get("Smartphone"), Some(200_000.0));
        assert_eq!(rows[0].len(), catalog.len());
    }

    proptest! {
        /// Property: the pivot always has twelve rows in calendar order.
        #[test]
        fn always_twelve_rows(count in 0usize..15, price in 0.0f64..10_000.0) {
            let products: Vec<Product> = (0..count)
                .map(|i| product(&format!("P{i}"), &format!("Name {i}"), price, [1; 12]))
                .collect();
            let rows = monthly_revenue_pivot(&products);
            prop_assert_eq!(rows.len(), 12);
            for (idx, row) in rows.iter().enumerate() {
                prop_assert_eq!(row.month().index(), idx);
                prop_assert_eq!(row.len(), count);
            }
        }
    }
}
