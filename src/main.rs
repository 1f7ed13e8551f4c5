use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use diagram_builder::config::{GeneratorConfig, ValidatorConfig};
use diagram_builder::llm::{LlmChat, LlmClient};
use diagram_builder::{DiagramKind, Generator, Validator, Verdict};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {source_name}: {source}")]
    Read { source_name: String, source: io::Error },
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "diagram-builder", about = "Generate and sanity-check Mermaid diagram markup")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate markup from a file, or stdin when no file is given.
    Validate(ValidateCommand),
    /// Generate markup from a description, then validate it.
    Generate(GenerateCommand),
    /// List supported diagram kinds in classification order.
    Kinds,
}

#[derive(Args, Debug)]
struct ValidateCommand {
    file: Option<PathBuf>,

    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateCommand {
    /// Diagram kind: label ("Gantt Chart"), short name ("gantt"), or marker.
    /// Unknown kinds fall back to a sequence diagram.
    #[arg(long, short, default_value = "sequence")]
    kind: String,

    #[arg(long)]
    json: bool,

    #[arg(required = true, num_args = 1..)]
    description: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Run one command. `Ok(false)` means the markup was judged invalid.
async fn run(command: Command) -> Result<bool, CliError> {
    match command {
        Command::Kinds => {
            for kind in DiagramKind::ALL {
                println!("{:<10} {:<16} {}", kind.to_string(), kind.marker(), kind.label());
            }
            Ok(true)
        }
        Command::Validate(cmd) => {
            let markup = read_markup(cmd.file.as_ref())?;
            let validator = Validator::with_llm(init_llm(), ValidatorConfig::from_env());
            let verdict = validator.validate(&markup).await;
            print_verdict(&verdict, cmd.json)?;
            Ok(verdict.valid)
        }
        Command::Generate(cmd) => {
            let description = cmd.description.join(" ");
            if description.trim().is_empty() {
                return Err(CliError::EmptyDescription);
            }
            let llm = init_llm();
            let generator = Generator::new(llm.clone(), GeneratorConfig::from_env());
            let validator = Validator::with_llm(llm, ValidatorConfig::from_env());

            let markup = generator.generate_labelled(&description, &cmd.kind).await;
            let verdict = validator.validate(&markup).await;
            if cmd.json {
                let out = serde_json::json!({ "markup": markup, "verdict": verdict });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{markup}\n");
                print_verdict(&verdict, false)?;
            }
            Ok(verdict.valid)
        }
    }
}

/// Build the LLM client once. Missing config disables LLM features.
fn init_llm() -> Option<Arc<dyn LlmChat>> {
    match LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, deep validation and generation disabled");
            None
        }
    }
}

fn read_markup(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| CliError::Read { source_name: path.display().to_string(), source }),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| CliError::Read { source_name: "stdin".to_string(), source })?;
            Ok(buf)
        }
    }
}

fn print_verdict(verdict: &Verdict, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(verdict)?);
    } else {
        println!("valid: {}", verdict.valid);
        println!("feedback: {}", verdict.feedback);
    }
    Ok(())
}
