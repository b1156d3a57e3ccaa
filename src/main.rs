//! mcpscout - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::future::Future;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

use mcpscout::{
    cli::{init_logging, Args, Commands, Verbosity},
    config::Config,
    ToolResult, ToolService,
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let verbosity = args.verbosity();
    init_logging(verbosity)?;

    let config_path = args.config_path()?;
    let mut config = Config::load_from(&config_path)?;
    args.apply_overrides(&mut config);

    if let Commands::Config { init } = &args.command {
        return show_config(&config, &config_path, *init);
    }

    let service = ToolService::new(args.catalog_source(&config)?);

    let code = match &args.command {
        Commands::List { category } => {
            if args.json {
                let result = with_spinner(verbosity, service.list_catalog(category.as_deref())).await;
                print_json(result)?
            } else {
                let result = with_spinner(verbosity, service.list(category.as_deref())).await;
                print_result(&result)
            }
        }
        Commands::Recommend { .. } => {
            let request = args
                .command
                .rank_request(&config)
                .ok_or_else(|| anyhow::anyhow!("recommend arguments missing"))?;
            if args.json {
                let result = with_spinner(verbosity, service.recommend_servers(&request)).await;
                print_json(result)?
            } else {
                let result = with_spinner(verbosity, service.recommend(&request)).await;
                print_result(&result)
            }
        }
        Commands::Categories => {
            if args.json {
                let result = with_spinner(verbosity, service.category_counts()).await;
                print_json(result)?
            } else {
                let result = with_spinner(verbosity, service.categories()).await;
                print_result(&result)
            }
        }
        Commands::Config { .. } => ExitCode::SUCCESS,
    };

    Ok(code)
}

/// Show a spinner on stderr while the catalog is fetched
async fn with_spinner<F: Future>(verbosity: Verbosity, operation: F) -> F::Output {
    if !verbosity.show_progress() || !std::io::stderr().is_terminal() {
        return operation.await;
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Fetching MCP server catalog...");
    pb.enable_steady_tick(Duration::from_millis(100));

    let output = operation.await;
    pb.finish_and_clear();
    output
}

fn print_result(result: &ToolResult) -> ExitCode {
    if result.success {
        println!("{}", result.output.trim_end());
        ExitCode::SUCCESS
    } else {
        eprintln!("{}: {}", "Error".red().bold(), result.text());
        ExitCode::FAILURE
    }
}

fn print_json<T: Serialize>(result: mcpscout::Result<T>) -> Result<ExitCode> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let error = serde_json::json!({ "error": e.to_string() });
            println!("{}", serde_json::to_string_pretty(&error)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn show_config(config: &Config, path: &std::path::Path, init: bool) -> Result<ExitCode> {
    if init {
        if path.exists() {
            println!("{} {}", "Config already exists:".yellow(), path.display());
        } else {
            Config::default().save_to(path)?;
            println!("{} {}", "Wrote default config:".green(), path.display());
        }
    }

    println!("{} {}", "Config file:".bold(), path.display());
    println!("{}", toml::to_string_pretty(config)?);
    Ok(ExitCode::SUCCESS)
}
