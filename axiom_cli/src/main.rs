//! Axiom CLI - answer one prompt and print the result record as JSON.

mod output;
mod telemetry;

use anyhow::Context;
use axiom_core::{AxiomModel, ModelConfig};
use axiom_graph::{ExternalKnowledgeBase, KnowledgeGraph};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use output::ResultRecord;
use telemetry::CostMeter;

#[derive(Parser, Debug)]
#[command(name = "axiom")]
#[command(author, version, about = "Axiom Dynamic Logic Model handler", long_about = None)]
struct Cli {
    /// The prompt for the model
    #[arg(long)]
    prompt: String,

    /// Enable local knowledge base grounding
    #[arg(long)]
    grounding: bool,

    /// JSON file with citation records (overrides the config file)
    #[arg(long, env = "AXIOM_KNOWLEDGE_BASE")]
    knowledge_base: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the result on a single line
    #[arg(long)]
    compact: bool,
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the config file,
    /// then command-line overrides.
    fn model_config(&self) -> anyhow::Result<ModelConfig> {
        let config = match &self.config {
            Some(path) => ModelConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => ModelConfig::default(),
        };

        Ok(match &self.knowledge_base {
            Some(path) => config.with_knowledge_base_path(path),
            None => config,
        })
    }
}

/// Filter applied to the workspace crates when `RUST_LOG` is unset.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "axiom=debug"
    } else {
        "axiom=warn"
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.model_config()?;
    let meter = CostMeter::start();

    let knowledge_base = if cli.grounding {
        ExternalKnowledgeBase::load_or_empty(&config.knowledge_base_path)
    } else {
        ExternalKnowledgeBase::empty()
    };
    let model = AxiomModel::new(KnowledgeGraph::builtin(), knowledge_base);
    let result = model.answer(&cli.prompt, cli.grounding);

    let record = ResultRecord::new(result, &config.model_name, meter.finish());
    let json = record
        .to_json(cli.compact)
        .context("failed to serialize result")?;
    println!("{}", json);

    Ok(())
}
