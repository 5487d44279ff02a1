//! `grc`: inspect GRC console data from JSON exports.
//!
//! ```bash
//! grc table --records policies.json --definitions definitions.json --sort violations
//! grc details --data policy.json --items details.json --rows 5 --columns 2
//! grc activity --policies policies.json
//! ```

mod config;
mod input;
mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use grc_core::{
    records_from_json, DetailItem, DetailsLayout, ResourceDefinitions, ResourceTable,
    TableDefinition, TableEvent, ViolationSummary,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::input::{read_json, unwrap_response};

#[derive(Parser)]
#[command(name = "grc")]
#[command(about = "Inspect GRC resource tables, details and violation summaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a resource table, then apply search and sort clicks in order
    Table(TableArgs),

    /// Lay out a details module for one record
    Details(DetailsArgs),

    /// Count policies and clusters in violation
    Activity {
        #[arg(long)]
        policies: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Args)]
struct TableArgs {
    /// Records export: array, keyed object, or GraphQL response
    #[arg(long)]
    records: PathBuf,

    /// Static table definitions (defaults to GRC_DEFINITIONS_PATH)
    #[arg(long)]
    definitions: Option<PathBuf>,

    /// Definition key within the definitions file (defaults to GRC_DEFINITION_KEY)
    #[arg(long)]
    definition: Option<String>,

    /// Search term, applied before any sort
    #[arg(long)]
    search: Vec<String>,

    /// Column to click; repeat to click again
    #[arg(long)]
    sort: Vec<String>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Args)]
struct DetailsArgs {
    /// Record to describe
    #[arg(long)]
    data: PathBuf,

    /// Details items: `[{ "cells": [{ "resourceKey": label }, { "resourceKey": path }] }]`
    #[arg(long)]
    items: PathBuf,

    #[arg(long, default_value_t = 5)]
    rows: usize,

    #[arg(long, default_value_t = 2)]
    columns: usize,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Table(args) => run_table(args, &config),
        Commands::Details(args) => run_details(args),
        Commands::Activity { policies, format } => run_activity(&policies, format),
    }
}

fn load_definition(args: &TableArgs, config: &Config) -> Result<TableDefinition> {
    let Some(path) = args.definitions.as_ref().or(config.definitions_path.as_ref()) else {
        tracing::debug!("no definitions file, keying rows by name");
        return Ok(TableDefinition::default());
    };
    let key = args.definition.as_deref().unwrap_or(&config.definition_key);
    let definitions = ResourceDefinitions::from_value(read_json(path)?)
        .with_context(|| format!("Invalid definitions in {}", path.display()))?;
    let definition = definitions.get(key)?.clone();
    tracing::info!(
        definition = key,
        columns = definition.table_keys.len(),
        "loaded table definition"
    );
    Ok(definition)
}

fn run_table(args: TableArgs, config: &Config) -> Result<()> {
    let definition = load_definition(&args, config)?;
    let records = records_from_json(unwrap_response(read_json(&args.records)?));

    let mut table = ResourceTable::new(definition);
    table.refresh(records);

    for term in &args.search {
        table.handle(TableEvent::search(term.as_str()));
    }
    for column in &args.sort {
        if !table.handle(TableEvent::sort(column.as_str())) {
            tracing::warn!(column = column.as_str(), "column is not sortable in this table");
        }
    }

    let model = table.model();
    match args.format {
        Format::Json => print_json(&model),
        Format::Text => {
            output::print_table(&model, table.definition());
            Ok(())
        }
    }
}

fn run_details(args: DetailsArgs) -> Result<()> {
    let data = unwrap_response(read_json(&args.data)?);
    let items: Vec<DetailItem> = serde_json::from_value(read_json(&args.items)?)
        .with_context(|| format!("Invalid details items in {}", args.items.display()))?;

    let columns = DetailsLayout::new(args.rows, args.columns).columns(&items, &data);
    match args.format {
        Format::Json => print_json(&columns),
        Format::Text => {
            output::print_details(&columns);
            Ok(())
        }
    }
}

fn run_activity(path: &Path, format: Format) -> Result<()> {
    let policies = records_from_json(unwrap_response(read_json(path)?));
    let summary = ViolationSummary::from_policies(&policies);
    tracing::info!(
        policies = policies.len(),
        violating_policies = summary.policies.len(),
        violating_clusters = summary.clusters.len(),
        "computed violation summary"
    );

    let cards = summary.cards();
    match format {
        Format::Json => print_json(&cards),
        Format::Text => {
            output::print_violations(&cards);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
