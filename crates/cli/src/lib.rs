pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands::filter::FilterArgs;

#[derive(Debug, Parser)]
#[command(
    name = "chipscout",
    about = "Chipscout component lookup CLI",
    long_about = "Search the component catalog, narrow results with facet filters, and ask for AI part suggestions.",
    after_help = "Examples:\n  chipscout search stm32\n  chipscout filter --category microcontrollers --brand STMicroelectronics\n  chipscout bom parts.csv --description \"replace the LDO\"\n  chipscout doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rank suggestions and matching chips for a query, then record it in history")]
    Search {
        query: String,
        #[arg(long, help = "Maximum number of suggestions (capped by search.max_limit)")]
        limit: Option<usize>,
    },
    #[command(about = "List recent searches, falling back to seeded entries")]
    Recent,
    #[command(about = "Show a chip with its alternatives")]
    Chip { id: String },
    #[command(about = "Show distributor offers for a chip, optionally priced for a quantity")]
    Order {
        id: String,
        #[arg(long)]
        quantity: Option<u32>,
    },
    #[command(about = "Show the category tree, or one category with its facets")]
    Categories { id: Option<String> },
    #[command(about = "Apply facet filter operations and print the resulting state")]
    Filter {
        #[arg(long, help = "Serialized filter state to start from")]
        state: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long = "brand")]
        brands: Vec<String>,
        #[arg(long = "package")]
        packages: Vec<String>,
        #[arg(long = "param", value_name = "NAME=VALUE")]
        parameters: Vec<String>,
        #[arg(long)]
        query: Option<String>,
        #[arg(long, help = "JSON array of filter operations applied last")]
        ops: Option<String>,
    },
    #[command(about = "Ask the configured model for a component matching a description")]
    Suggest { description: String },
    #[command(about = "Ask the configured model for a part suggestion from a BOM file")]
    Bom {
        path: PathBuf,
        #[arg(long, help = "What the replacement part should do")]
        description: String,
        #[arg(long, help = "Override the mime type guessed from the file extension")]
        mime: Option<String>,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, catalog integrity, history store, and model settings")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Search { query, limit } => commands::search::run(&query, limit),
        Command::Recent => commands::recent::run(),
        Command::Chip { id } => commands::chip::run(&id),
        Command::Order { id, quantity } => commands::order::run(&id, quantity),
        Command::Categories { id } => commands::categories::run(id.as_deref()),
        Command::Filter { state, category, brands, packages, parameters, query, ops } => {
            commands::filter::run(&FilterArgs {
                state,
                category,
                brands,
                packages,
                parameters,
                query,
                ops,
            })
        }
        Command::Suggest { description } => commands::suggest::run(&description),
        Command::Bom { path, description, mime } => {
            commands::bom::run(&path, &description, mime.as_deref())
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
