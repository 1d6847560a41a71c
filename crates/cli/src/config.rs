//! Command-line arguments and environment configuration.
//!
//! Every global option can also be set through a `SALESDASH_*` environment
//! variable; flags win over the environment.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};

use salesdash_dashboard::ActiveTab;
use salesdash_observability::LogFormat;
use salesdash_products::{Catalog, ValidationPolicy};

/// Sales dashboard in the terminal.
///
/// Reports unit sales and revenue for a product catalog, optionally
/// filtered by category.
#[derive(Parser, Debug)]
#[command(name = "salesdash", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// JSON catalog to load instead of the built-in sample.
    #[arg(long, global = true, env = "SALESDASH_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// How malformed catalog records are handled.
    #[arg(long, global = true, value_enum, default_value_t = PolicyArg::Permissive, env = "SALESDASH_POLICY")]
    pub policy: PolicyArg,

    /// Category to report on (`all` for every product).
    #[arg(long, global = true, default_value = "all", env = "SALESDASH_CATEGORY")]
    pub category: String,

    /// Output format on stdout.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log line format on stderr (`text` or `json`).
    #[arg(long, global = true, default_value = "text", env = "SALESDASH_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    pub fn policy(&self) -> ValidationPolicy {
        self.policy.into()
    }

    /// Catalog named by `--catalog`, or the sample catalog.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::from_json_file(path, self.policy())
                .with_context(|| format!("failed to load catalog from {}", path.display())),
            None => Ok(Catalog::seed()),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Total revenue, total units and product count.
    Summary,
    /// Category selector values.
    Categories,
    /// Product cards for the selected category.
    Products,
    /// Monthly revenue per product and revenue share.
    Charts,
    /// Product table for the selected category.
    Table,
    /// Stat cards, tabs and the content of one tab.
    Dashboard {
        /// Tab to render (`products`, `charts` or `table`).
        #[arg(long, default_value = "products")]
        tab: ActiveTab,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Zero-fill short sales series, tolerate duplicates.
    Permissive,
    /// Reject malformed records.
    Strict,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Permissive => ValidationPolicy::Permissive,
            PolicyArg::Strict => ValidationPolicy::Strict,
        }
    }
}
