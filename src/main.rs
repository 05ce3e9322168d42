//! Command-line inspection of a route table.
//!
//! Loads a router configuration (or the built-in site table), applies
//! `BASE_URL`, and answers questions about it: which routes exist, what a
//! location resolves to, and what a sequence of navigations mounts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use view_router::lifecycle::startup;
use view_router::observability::logging;
use view_router::{NavigationError, Navigator, ResolvedRoute, ViewRegistry};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Inspect and exercise a history-mode route table", long_about = None)]
struct Cli {
    /// Router configuration file (TOML). Defaults to the built-in site table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base href, overriding the file and BASE_URL.
    #[arg(short, long)]
    base: Option<String>,

    /// Log level (default: info). `RUST_LOG` takes precedence.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match order
    Routes,
    /// Validate the configuration
    Check,
    /// Resolve an address-bar location
    Resolve { location: String },
    /// Print the absolute href of a named route
    Href { name: String },
    /// Replay navigation steps: paths, `@name`, `back` or `forward`
    Navigate {
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging comes up before the configuration is read so that loading and
    // route table construction are visible; `RUST_LOG` still takes precedence.
    logging::init_logging(cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL));

    let started = match startup(cli.config.as_deref(), cli.base.as_deref(), &ViewRegistry::site()) {
        Ok(started) => started,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let mut navigator = started.navigator;
    match run(cli.command, &mut navigator) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, navigator: &mut Navigator) -> Result<ExitCode, serde_json::Error> {
    match command {
        Commands::Routes => {
            let routes: Vec<Value> = navigator
                .table()
                .routes()
                .map(|route| {
                    json!({
                        "name": route.name,
                        "path": route.path,
                        "view": route.view.name(),
                        "href": navigator.href(&route.path),
                    })
                })
                .collect();
            print_json(&Value::Array(routes))?;
        }
        Commands::Check => {
            print_json(&json!({
                "status": "ok",
                "base": navigator.href("/"),
                "routes": navigator.table().len(),
            }))?;
        }
        Commands::Resolve { location } => match navigator.resolve_location(&location) {
            Ok(route) => print_json(&json!({ "route": route.summary() }))?,
            Err(not_found) => {
                print_json(&json!({ "error": not_found.to_string(), "path": not_found.path }))?;
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Href { name } => match navigator.href_for(&name) {
            Ok(href) => println!("{}", href),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Navigate { steps } => {
            let mut failed = false;
            let opened = navigator.start();
            print_step(navigator, "start", opened, &mut failed)?;
            for step in steps {
                let result = match step.as_str() {
                    "back" => navigator.back(),
                    "forward" => navigator.forward(),
                    _ => match step.strip_prefix('@') {
                        Some(name) => navigator.push_named(name),
                        None => navigator.push(&step),
                    },
                };
                print_step(navigator, &step, result, &mut failed)?;
            }
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_step(
    navigator: &Navigator,
    step: &str,
    result: Result<ResolvedRoute, NavigationError>,
    failed: &mut bool,
) -> Result<(), serde_json::Error> {
    let error = match &result {
        Ok(_) => Value::Null,
        Err(e) => {
            *failed = true;
            Value::String(e.to_string())
        }
    };

    let line = json!({
        "step": step,
        "location": navigator.location(),
        "href": navigator.base().absolute(navigator.location()),
        "mounted": navigator.current().map(|route| route.summary()),
        "error": error,
    });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
