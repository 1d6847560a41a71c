//! Plain-text rendering of dashboard views.
//!
//! Amounts use grouped thousands and the catalog currency suffix; fractional
//! amounts keep two decimals with a comma separator.

use std::fmt::Write as _;

use salesdash_dashboard::{ActiveTab, DashboardView, palette_color};
use salesdash_products::SEED_CURRENCY;

const TITLE: &str = "Tableau de Bord des Ventes";

/// `1234567` -> `"1 234 567"`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Grouped amount with at most two decimals, no currency.
pub fn format_amount(value: f64) -> String {
    let rounded = (value.abs() * 100.0).round() as u64;
    let (whole, cents) = (rounded / 100, rounded % 100);
    let sign = if value < 0.0 && rounded > 0 { "-" } else { "" };
    if cents == 0 {
        format!("{sign}{}", format_thousands(whole))
    } else {
        format!("{sign}{},{cents:02}", format_thousands(whole))
    }
}

pub fn format_money(value: f64) -> String {
    format!("{} {SEED_CURRENCY}", format_amount(value))
}

pub fn format_percent(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}

pub fn summary(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Chiffre d'Affaires Total  {}", format_money(view.totals.total_revenue));
    let _ = writeln!(out, "Ventes Totales            {} unités", format_thousands(view.totals.total_units));
    let _ = write!(out, "Nombre de Produits        {}", view.totals.product_count);
    out
}

pub fn categories(view: &DashboardView) -> String {
    view.categories
        .iter()
        .map(|option| {
            let marker = if option.value == view.selected_category.as_str() { '*' } else { ' ' };
            format!("{marker} {:<24} {}", option.value, option.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn product_cards(view: &DashboardView) -> String {
    if view.products.is_empty() {
        return format!("Aucun produit pour la catégorie {}", view.selected_category);
    }

    let mut out = String::new();
    for (idx, product) in view.products.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", product.name);
        let _ = writeln!(out, "  Référence          {}", product.reference);
        let _ = writeln!(out, "  Catégorie          {}", product.category);
        let _ = writeln!(out, "  Prix               {}", format_money(product.unit_price));
        let _ = writeln!(out, "  Ventes totales     {} unités", format_thousands(product.total_units));
        let _ = writeln!(out, "  Chiffre d'affaires {}", format_money(product.total_revenue));
    }
    out.trim_end().to_string()
}

pub fn table(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<22} {:<14} {:>14} {:>14} {:>18}",
        "Référence", "Nom", "Catégorie", "Prix", "Ventes Totales", "Chiffre d'Affaires"
    );
    for p in &view.products {
        let _ = writeln!(
            out,
            "{:<10} {:<22} {:<14} {:>14} {:>14} {:>18}",
            p.reference.as_str(),
            p.name,
            p.category,
            format_money(p.unit_price),
            format_thousands(p.total_units),
            format_money(p.total_revenue)
        );
    }
    out.trim_end().to_string()
}

pub fn charts(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Ventes Mensuelles");
    let _ = write!(out, "{:<5}", "Mois");
    for series in &view.chart_series {
        let _ = write!(out, " {:>20}", truncate(&series.name, 20));
    }
    out.push('\n');
    for row in &view.monthly_revenue {
        let _ = write!(out, "{:<5}", row.month().label());
        for series in &view.chart_series {
            let value = row.get(&series.name).unwrap_or(0.0);
            let _ = write!(out, " {:>20}", format_amount(value));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\nRépartition des Chiffres d'Affaires");
    for (idx, share) in view.revenue_share.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {} {:<22} {:>18} ({})",
            palette_color(idx),
            share.name,
            format_money(share.revenue),
            format_percent(share.share)
        );
    }
    out.trim_end().to_string()
}

/// Header, stat cards, tab bar, then the active tab's content.
pub fn dashboard(view: &DashboardView) -> String {
    let tabs = ActiveTab::ALL
        .iter()
        .map(|tab| {
            if *tab == view.active_tab {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    let content = match view.active_tab {
        ActiveTab::Products => product_cards(view),
        ActiveTab::Charts => charts(view),
        ActiveTab::Table => table(view),
    };

    format!(
        "{TITLE} ({})\n\n{}\n\n{tabs}\n\n{content}",
        view.selected_category,
        summary(view)
    )
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
