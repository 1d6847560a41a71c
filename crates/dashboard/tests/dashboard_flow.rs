//! End-to-end flow: load a catalog, drive the store, read derived views.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use salesdash_core::DomainError;
use salesdash_dashboard::{ActiveTab, DashboardStore};
use salesdash_products::{Catalog, CatalogError, ValidationPolicy};
use salesdash_sales::CategoryFilter;

const SLICE_JSON: &str = r#"{
    "data": [
        {
            "reference": "P001",
            "nom": "Ordinateur Portable",
            "prix": 12000,
            "image": "./images/laptop.jpg",
            "categorie": "Informatique",
            "ventes_mensuelles": [10, 15, 12, 8, 20, 18, 22, 25, 19, 30, 28, 35]
        },
        {
            "reference": "P003",
            "nom": "Casque Audio",
            "prix": 1500,
            "image": "./images/headphone.jpg",
            "categorie": "Accessoires",
            "ventes_mensuelles": [12, 18, 15, 20, 22, 30, 35, 40, 42, 38, 50, 55]
        }
    ],
    "selectedCategory": "all",
    "activeTab": "products"
}"#;

#[test]
fn loaded_catalog_drives_filtered_views() {
    let catalog = Catalog::from_json_str(SLICE_JSON, ValidationPolicy::Strict).unwrap();
    let store = DashboardStore::default();
    store.set_data(catalog).unwrap();

    let view = store.view().unwrap();
    let values: Vec<&str> = view.categories.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(values, ["all", "Informatique", "Accessoires"]);
    assert_eq!(view.products.len(), 2);
    assert_eq!(view.totals.total_units, 242 + 377);
    assert_eq!(view.totals.total_revenue, 242.0 * 12000.0 + 377.0 * 1500.0);

    store.set_selected_category("Accessoires").unwrap();
    let view = store.view().unwrap();
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].name, "Casque Audio");
    assert_eq!(view.products[0].total_revenue, 377.0 * 1500.0);
    assert_eq!(view.monthly_revenue[0].get("Casque Audio"), Some(18_000.0));
    assert_eq!(view.monthly_revenue[0].get("Ordinateur Portable"), None);
    // Totals and shares stay catalog-wide.
    assert_eq!(view.totals.product_count, 2);
    assert_eq!(view.revenue_share.len(), 2);
}

#[test]
fn selecting_absent_category_yields_empty_views() {
    let store = DashboardStore::default();
    store.set_selected_category("Jardin").unwrap();

    let view = store.view().unwrap();
    assert!(view.products.is_empty());
    assert_eq!(view.monthly_revenue.len(), 12);
    assert!(view.monthly_revenue.iter().all(|row| row.is_empty()));
    assert_eq!(view.totals.product_count, 6);
}

#[test]
fn strict_loading_rejects_short_series() {
    let json = r#"[{"reference":"P009","nom":"X","prix":1,"categorie":"A","ventes_mensuelles":[1,2,3]}]"#;
    let err = Catalog::from_json_str(json, ValidationPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Domain(DomainError::MalformedProduct { len: 3, .. })
    ));

    let lenient = Catalog::from_json_str(json, ValidationPolicy::Permissive).unwrap();
    assert_eq!(lenient.products()[0].monthly_sales().total(), 6);
}

#[test]
fn subscriber_on_another_thread_observes_changes() {
    let store = Arc::new(DashboardStore::default());
    let subscription = store.subscribe();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            store.set_active_tab(ActiveTab::Charts).unwrap();
            store.set_selected_category(CategoryFilter::parse("Électronique")).unwrap();
        })
    };
    writer.join().unwrap();

    let first = subscription.recv_timeout(Duration::from_secs(1)).unwrap();
    let second = subscription.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(first.active_tab, ActiveTab::Charts);
    assert_eq!(second.selected_category.as_str(), "Électronique");
    assert!(subscription.try_recv().is_err());
}
