use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use archgraph::config::{ExtractorConfig, SupertypePolicy};
use archgraph::core::class_graph::{self, ClassGraphBuilder};
use archgraph::core::{ArchitectureExtractor, EdgeKind};
use archgraph::formatters::JsonFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "archgraph",
    version,
    about = "Extracts an architecture graph (classes, metrics, dependencies) from Java sources"
)]
struct Cli {
    /// Root directory of the sources to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file for the JSON document
    #[arg(short, long, value_name = "FILE", default_value = "abstraction.json")]
    output: PathBuf,

    /// TOML file with extractor settings
    #[arg(short, long, value_name = "FILE", env = "ARCHGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Comma-separated edge kinds to emit
    #[arg(long, value_name = "KINDS", value_enum, value_delimiter = ',')]
    edges: Option<Vec<EdgeKind>>,

    /// Emit an inherit edge for every extended and implemented type
    #[arg(long)]
    all_supertypes: bool,

    /// Qualify edge targets through imports and same-file declarations
    #[arg(long)]
    resolve_targets: bool,

    /// Keep simple class names instead of package-qualified ones
    #[arg(long)]
    no_resolve: bool,

    /// Process files one at a time
    #[arg(long)]
    sequential: bool,

    /// Source file extension
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "archgraph=debug"
    } else {
        "archgraph=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    if let Some(edges) = &cli.edges {
        config.edge_kinds = edges.clone();
    }
    if let Some(extension) = &cli.extension {
        config.extension = extension.clone();
    }
    if cli.all_supertypes {
        config.supertypes = SupertypePolicy::All;
    }
    if cli.resolve_targets {
        config.resolve_targets = true;
    }
    if cli.no_resolve {
        config.resolve_names = false;
    }
    if cli.sequential {
        config.parallel = false;
    }
    if cli.follow_links {
        config.follow_links = true;
    }

    config
        .validate(cli.config.as_deref().unwrap_or(Path::new("<command line>")))
        .context("invalid settings")?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let start_time = Instant::now();
    let config = load_config(&cli)?;

    println!("archgraph - Architecture Graph Extraction");
    println!("Input: {}", cli.input.display());
    println!("Output: {}", cli.output.display());

    let extractor = ArchitectureExtractor::new(config).context("failed to initialize parser")?;
    let extraction = extractor
        .extract(&cli.input)
        .with_context(|| format!("failed to extract {}", cli.input.display()))?;

    let edge_kinds: Vec<&str> = extractor
        .config()
        .edge_kinds
        .iter()
        .map(|kind| kind.as_str())
        .collect();
    let summary = class_graph::summarize(&ClassGraphBuilder::from_architecture(&extraction.graph));
    println!(
        "Files: {} scanned, {} skipped",
        extraction.files_scanned,
        extraction.failures.len()
    );
    println!(
        "Classes: {}, edges: {} ({}) - {} internal, {} to {} external targets",
        summary.classes,
        extraction.graph.edge_count(),
        edge_kinds.join(","),
        summary.internal_edges,
        summary.external_edges,
        summary.external_targets
    );

    JsonFormatter::new()
        .format_to_file(&extraction.graph, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("Extraction complete. Saved to: {}", cli.output.display());
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
