use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use command_router::config::load_config;
use command_router::routing::dispatch::{fallback_chain, Step, DISPATCH_TABLE};
use command_router::routing::{Resolver, RuleSet};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect how the command router resolves requests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a method and URI to a command
    Resolve {
        /// HTTP method (case-insensitive)
        method: String,
        /// Request path, e.g. /api/v1/accounts/users/42
        uri: String,
        /// API prefix stripped before matching
        #[arg(short, long, default_value = "")]
        prefix: String,
        /// Disable the /service/action shortcut rule
        #[arg(long)]
        no_service_action: bool,
    },
    /// Print the rule table in priority order
    Rules {
        /// Only show the chain for this method
        method: Option<String>,
        /// Disable the /service/action shortcut rule
        #[arg(long)]
        no_service_action: bool,
    },
    /// Load and validate a config file
    CheckConfig { path: PathBuf },
}

#[derive(Serialize)]
struct RuleRow {
    stage: String,
    shape: String,
    action: &'static str,
    pattern: String,
}

impl RuleRow {
    fn new(stage: &str, step: &Step) -> Self {
        Self {
            stage: stage.to_string(),
            shape: step.kind.shape(),
            action: step.action_label(),
            pattern: step.kind.rule().pattern().to_string(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            method,
            uri,
            prefix,
            no_service_action,
        } => {
            let resolver = Resolver::new(RuleSet::from_flag(!no_service_action));
            match resolver.resolve(&method, &uri, &prefix) {
                Ok(route) => print_json(&route),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Rules {
            method,
            no_service_action,
        } => {
            let rules = RuleSet::from_flag(!no_service_action);
            let mut rows: Vec<RuleRow> = rules
                .custom_steps()
                .iter()
                .map(|step| RuleRow::new("any", step))
                .collect();

            match method {
                Some(method) => {
                    let method = method.to_lowercase();
                    rows.extend(fallback_chain(&method).iter().map(|s| RuleRow::new(&method, s)));
                }
                None => {
                    for (name, steps) in DISPATCH_TABLE {
                        rows.extend(steps.iter().map(|s| RuleRow::new(name, s)));
                    }
                }
            }
            print_json(&rows)
        }
        Commands::CheckConfig { path } => match load_config(&path) {
            Ok(config) => {
                println!("{} is valid", path.display());
                print_json(&config)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
