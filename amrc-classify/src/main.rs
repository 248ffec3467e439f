//! Maintenance report classifier (amrc-classify) - command-line entry point
//!
//! Classifies one report, a JSON batch file, or prints the taxonomy and a
//! health self-test. JSON goes to stdout; logs go to stderr.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use amrc_classify::batch::{classify_batch, load_reports};
use amrc_classify::classifiers::{AtaClassifier, DefectTypeClassifier, ISpecClassifier};
use amrc_classify::{ClassificationSummary, ClassifierService, ReportMetadata};
use amrc_common::config::{resolve_log_level, ConfigResolver, TomlConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MODULE_NAME: &str = "amrc-classify";

/// Command-line arguments for amrc-classify
#[derive(Parser, Debug)]
#[command(name = "amrc-classify")]
#[command(about = "Classify aircraft maintenance reports (ATA, iSpec 2200, defect type)")]
#[command(version)]
struct Args {
    /// Config file path (falls back to AMRC_CONFIG, then the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one report (reads stdin when TEXT is omitted)
    Classify {
        /// Report text
        text: Option<String>,

        /// Aircraft type, e.g. "Boeing 737-800"
        #[arg(long)]
        aircraft_type: Option<String>,

        /// Report date (ISO-8601)
        #[arg(long)]
        report_date: Option<String>,

        /// Print the summary projection
        #[arg(long)]
        summary: bool,
    },

    /// Classify a JSON array of reports
    Batch {
        /// Input file
        file: PathBuf,

        /// Maximum reports classified at once (overrides config)
        #[arg(long)]
        concurrency: Option<usize>,

        /// Print summary projections
        #[arg(long)]
        summary: bool,
    },

    /// Print chapters, part categories, defect types and actions
    Taxonomy,

    /// Run the classifier health self-test
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let resolver = ConfigResolver::new(MODULE_NAME);
    let config_path = resolver.resolve(args.config.as_deref());
    let config = resolver
        .load(args.config.as_deref())
        .context("Failed to load configuration")?;
    let log_level = resolve_log_level(args.log_level.as_deref(), &config);

    // Initialize tracing (stderr; stdout carries JSON only)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("amrc_classify={0},amrc_common={0}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &config_path {
        Some(path) if path.exists() => info!("Configuration: {}", path.display()),
        Some(path) => warn!("Config file {} not found, using built-in defaults", path.display()),
        None => info!("Configuration: built-in defaults"),
    }

    let service = Arc::new(ClassifierService::new().context("Failed to initialize classifiers")?);

    match args.command {
        Command::Classify {
            text,
            aircraft_type,
            report_date,
            summary,
        } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin().context("Failed to read report from stdin")?,
            };
            let metadata = ReportMetadata::new(aircraft_type, report_date);
            let metadata = (!metadata.is_empty()).then_some(metadata);

            let classification = service.classify_report(&text, metadata.as_ref());
            if summary || config.output.summary {
                print_json(&ClassificationSummary::from(&classification), &config)?;
            } else {
                print_json(&classification.to_api(), &config)?;
            }
        }

        Command::Batch {
            file,
            concurrency,
            summary,
        } => {
            let reports = load_reports(&file)
                .with_context(|| format!("Failed to load reports from {}", file.display()))?;
            let max_concurrency = concurrency.unwrap_or(config.batch.max_concurrency);

            let records = classify_batch(Arc::clone(&service), reports, max_concurrency).await;

            if summary || config.output.summary {
                let summaries: Vec<_> = records
                    .iter()
                    .map(|r| {
                        json!({
                            "id": r.id,
                            "classified_at": r.classified_at,
                            "classification": ClassificationSummary::from(&r.classification),
                        })
                    })
                    .collect();
                print_json(&summaries, &config)?;
            } else {
                let records: Vec<_> = records
                    .into_iter()
                    .map(|mut r| {
                        r.classification = r.classification.to_api();
                        r
                    })
                    .collect();
                print_json(&records, &config)?;
            }
        }

        Command::Taxonomy => {
            let defect_types: Vec<_> = DefectTypeClassifier::list_defect_types()
                .iter()
                .map(|d| {
                    json!({
                        "name": d.as_str(),
                        "keywords": d.keywords(),
                        "severity_indicators": d.severity_indicators(),
                    })
                })
                .collect();

            let taxonomy = json!({
                "ata_chapters": AtaClassifier::list_chapters()
                    .into_iter()
                    .map(|(code, name)| json!({ "code": code, "name": name }))
                    .collect::<Vec<_>>(),
                "part_categories": ISpecClassifier::list_categories()
                    .into_iter()
                    .map(|(name, description)| json!({ "name": name, "description": description }))
                    .collect::<Vec<_>>(),
                "defect_types": defect_types,
                "maintenance_actions": DefectTypeClassifier::list_maintenance_actions(),
            });
            print_json(&taxonomy, &config)?;
        }

        Command::Health => {
            print_json(&service.health_status(), &config)?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn print_json<T: Serialize>(value: &T, config: &TomlConfig) -> Result<()> {
    let output = if config.output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{}", output);
    Ok(())
}
