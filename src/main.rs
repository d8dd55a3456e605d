// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rules_index::utils::logging::{format_error, format_info, format_success, format_warning};
use rules_index::{
    Config, ExportTarget, JsonExporter, PipelineError, PipelineOrchestrator, Validator,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rules_index")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Builds a search-index JSON feed from numbered rule documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every document in the configured range and print the JSON feed
    Build {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(long, value_name = "DIR", env = "RULES_INDEX_CONTENT_DIR")]
        content_dir: Option<PathBuf>,

        /// Exit with an error when no records were produced
        #[arg(long)]
        strict: bool,

        #[arg(long)]
        progress: bool,
    },

    /// Print the records of a single document
    Inspect {
        document: u32,

        #[arg(long, value_name = "DIR")]
        content_dir: Option<PathBuf>,
    },

    /// Check the content directory and list documents without a source file
    Verify {
        #[arg(long, value_name = "DIR")]
        content_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rules_index::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Build {
            output,
            content_dir,
            strict,
            progress,
        } => {
            if let Some(dir) = content_dir {
                config.source.content_dir = dir;
            }
            config.pipeline.fail_on_empty |= strict;
            config.pipeline.show_progress |= progress;
            cmd_build(config, output, cli.color).await?;
        }
        Commands::Inspect {
            document,
            content_dir,
        } => {
            if let Some(dir) = content_dir {
                config.source.content_dir = dir;
            }
            cmd_inspect(config, document).await?;
        }
        Commands::Verify { content_dir } => {
            if let Some(dir) = content_dir {
                config.source.content_dir = dir;
            }
            cmd_verify(&config)?;
        }
    }

    Ok(())
}

async fn cmd_build(config: Config, output: Option<PathBuf>, color: bool) -> Result<()> {
    let fail_on_empty = config.pipeline.fail_on_empty;
    let orchestrator = PipelineOrchestrator::new(config)
        .context("Invalid configuration")?
        .with_color(color);

    let collected = orchestrator.run().await.context("Indexing failed")?;

    let exporter = match output {
        Some(path) => JsonExporter::new(ExportTarget::File(path)),
        None => JsonExporter::new(ExportTarget::Stdout),
    };
    let exported = exporter
        .export(collected.records)
        .context("Failed to write index")?;

    eprintln!(
        "{}",
        format_success(&format!(
            "{} records from {} documents",
            exported, collected.stats.documents_indexed
        ))
    );

    if exported == 0 && fail_on_empty {
        eprintln!("{}", format_error("Strict mode: the index is empty"));
        bail!("No records were produced");
    }

    Ok(())
}

async fn cmd_inspect(config: Config, document: u32) -> Result<()> {
    let orchestrator = PipelineOrchestrator::new(config).context("Invalid configuration")?;

    let records = match orchestrator.processor().process(document).await {
        Ok(Some(processed)) => {
            eprintln!(
                "{}",
                format_info(&format!(
                    "Document {}: {} records",
                    processed.document,
                    processed.records.len()
                ))
            );
            processed.records
        }
        Ok(None) => {
            eprintln!(
                "{}",
                format_warning(&format!("Document {} has no source", document))
            );
            Vec::new()
        }
        Err(e @ PipelineError::MalformedDocument { .. }) => {
            eprintln!("{}", format_warning(&e.to_string()));
            Vec::new()
        }
        Err(e) => return Err(e).context(format!("Failed to process document {}", document)),
    };

    JsonExporter::default()
        .export(records)
        .context("Failed to write records")?;

    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    Validator::validate_config(config).context("Verification failed")?;

    let survey = Validator::survey_sources(&config.source);
    eprintln!(
        "{}",
        format_info(&format!(
            "{} of {} documents present in {}",
            survey.present.len(),
            survey.present.len() + survey.missing.len(),
            config.source.content_dir.display()
        ))
    );

    if survey.missing.is_empty() {
        eprintln!("{}", format_success("All documents present"));
    } else {
        let missing: Vec<String> = survey.missing.iter().map(u32::to_string).collect();
        eprintln!(
            "{}",
            format_warning(&format!("Missing: {}", missing.join(", ")))
        );
    }

    Ok(())
}
