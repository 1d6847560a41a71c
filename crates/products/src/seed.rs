//! Built-in sample catalog (six products, prices in MAD).

use salesdash_core::ProductReference;

use crate::catalog::Catalog;
use crate::product::{MonthlySales, Product};

/// Currency every seed price is expressed in.
pub const SEED_CURRENCY: &str = "MAD";

struct SeedProduct {
    reference: &'static str,
    name: &'static str,
    unit_price: f64,
    image_path: &'static str,
    category: &'static str,
    monthly_sales: [u64; 12],
}

const SEED_PRODUCTS: [SeedProduct; 6] = [
    SeedProduct {
        reference: "P001",
        name: "Ordinateur Portable",
        unit_price: 12000.0,
        image_path: "./images/laptop.jpg",
        category: "Informatique",
        monthly_sales: [10, 15, 12, 8, 20, 18, 22, 25, 19, 30, 28, 35],
    },
    SeedProduct {
        reference: "P002",
        name: "Smartphone",
        unit_price: 8000.0,
        image_path: "./images/smartphone1.jpg",
        category: "Informatique",
        monthly_sales: [25, 30, 22, 18, 35, 40, 38, 50, 45, 55, 60, 70],
    },
    SeedProduct {
        reference: "P003",
        name: "Casque Audio",
        unit_price: 1500.0,
        image_path: "./images/headphone.jpg",
        category: "Accessoires",
        monthly_sales: [12, 18, 15, 20, 22, 30, 35, 40, 42, 38, 50, 55],
    },
    SeedProduct {
        reference: "P004",
        name: "Téléviseur 4K",
        unit_price: 9000.0,
        image_path: "./images/tv.jpg",
        category: "Électronique",
        monthly_sales: [8, 12, 15, 10, 20, 18, 22, 30, 35, 28, 32, 40],
    },
    SeedProduct {
        reference: "P005",
        name: "Tablette",
        unit_price: 5000.0,
        image_path: "./images/tablet.jpg",
        category: "Informatique",
        monthly_sales: [14, 20, 18, 22, 28, 30, 25, 35, 40, 38, 42, 45],
    },
    SeedProduct {
        reference: "P006",
        name: "Enceinte Bluetooth",
        unit_price: 1200.0,
        image_path: "./images/speaker.jpg",
        category: "Accessoires",
        monthly_sales: [18, 22, 25, 28, 30, 35, 40, 42, 38, 50, 55, 60],
    },
];

impl Catalog {
    /// The sample catalog the dashboard starts with.
    pub fn seed() -> Self {
        let products = SEED_PRODUCTS
            .iter()
            .map(|seed| Product {
                reference: ProductReference::from_static(seed.reference),
                name: seed.name.to_string(),
                unit_price: seed.unit_price,
                image_path: seed.image_path.to_string(),
                category: seed.category.to_string(),
                monthly_sales: MonthlySales::new(seed.monthly_sales),
            })
            .collect();
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ValidationPolicy;

    #[test]
    fn seed_has_six_unique_products() {
        let seed = Catalog::seed();
        assert_eq!(seed.len(), 6);
        // Strict re-validation must accept the seed as-is.
        Catalog::from_products(seed.products().to_vec(), ValidationPolicy::Strict).unwrap();
    }

    #[test]
    fn seed_prices_are_valid() {
        for product in Catalog::seed().iter() {
            assert!(product.unit_price() > 0.0);
            assert!(!product.category().is_empty());
        }
    }
}
