//! # salesdash-cli
//!
//! Terminal front end for the sales dashboard.
//!
//! - Argument parsing and configuration live in [`config`].
//! - Text formatting (thousands grouping, currency suffix) lives in [`render`].
//! - [`run`] drives a `DashboardStore` exactly like an interactive front end
//!   would: select a category, select a tab, read the derived view.

pub mod config;
pub mod render;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use salesdash_dashboard::{ActiveTab, DashboardStore, DashboardView};
use salesdash_sales::CategoryFilter;

pub use config::{Cli, Command, GlobalArgs, OutputFormat};

/// Parse process arguments.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Execute one command and return what should be printed on stdout.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let catalog = cli.global.load_catalog()?;
    info!(products = catalog.len(), command = cli.command.name(), "catalog loaded");

    let store = DashboardStore::with_catalog(catalog);
    store
        .set_selected_category(CategoryFilter::parse(&cli.global.category))
        .context("failed to select category")?;
    if let Some(tab) = cli.command.tab() {
        store.set_active_tab(tab).context("failed to select tab")?;
    }
    let view = store.view().context("failed to compute dashboard view")?;

    match cli.global.format {
        OutputFormat::Json => render_json(&cli.command, &view),
        OutputFormat::Text => Ok(render_text(&cli.command, &view)),
    }
}

fn render_text(command: &Command, view: &DashboardView) -> String {
    match command {
        Command::Summary => render::summary(view),
        Command::Categories => render::categories(view),
        Command::Products => render::product_cards(view),
        Command::Charts => render::charts(view),
        Command::Table => render::table(view),
        Command::Dashboard { .. } => render::dashboard(view),
    }
}

fn render_json(command: &Command, view: &DashboardView) -> anyhow::Result<String> {
    let value = match command {
        Command::Summary => serde_json::to_value(view.totals)?,
        Command::Categories => serde_json::to_value(&view.categories)?,
        Command::Products | Command::Table => serde_json::to_value(&view.products)?,
        Command::Charts => serde_json::json!({
            "monthly_revenue": view.monthly_revenue,
            "series": view.chart_series,
            "revenue_share": view.revenue_share,
        }),
        Command::Dashboard { .. } => serde_json::to_value(view)?,
    };
    serde_json::to_string_pretty(&value).context("failed to serialize output")
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Summary => "summary",
            Command::Categories => "categories",
            Command::Products => "products",
            Command::Charts => "charts",
            Command::Table => "table",
            Command::Dashboard { .. } => "dashboard",
        }
    }

    /// Tab a command corresponds to, if any.
    pub fn tab(&self) -> Option<ActiveTab> {
        match self {
            Command::Products => Some(ActiveTab::Products),
            Command::Charts => Some(ActiveTab::Charts),
            Command::Table => Some(ActiveTab::Table),
            Command::Dashboard { tab } => Some(*tab),
            Command::Summary | Command::Categories => None,
        }
    }
}
