//! Command implementations and argument parsing for the seedcast CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use seedcast_core::{
    BarabasiAlbert, CentralityRecord, DEFAULT_RANDOM_SEED, Graph, GraphPayload, HolmeKim, NodeId,
    Orientation, SeedPolicy, SeedSelector, SeedcastError, compute_centrality,
};
use seedcast_providers_edgelist::{EdgeListError, EdgeListSource};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_NODES: usize = 100;
const DEFAULT_ATTACHMENT: usize = 2;
const DEFAULT_CLOSURE_PROBABILITY: f64 = 0.5;
const DEFAULT_SEED_COUNT: usize = 1;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "seedcast", about = "Grow scale-free graphs and rank seed nodes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Grow a synthetic graph and emit the canonical JSON payload.
    Generate(GenerateCommand),
    /// Compute the seven per-node centrality metrics.
    Metrics(MetricsCommand),
    /// Select seed nodes under a placement policy.
    Seeds(SeedsCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Pretty-print the JSON payload.
    #[arg(long)]
    pub pretty: bool,

    /// Generative model configuration.
    #[command(subcommand)]
    pub model: GeneratorSource,
}

/// Options accepted by the `metrics` command.
#[derive(Debug, Args, Clone)]
pub struct MetricsCommand {
    /// Graph to score.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Options accepted by the `seeds` command.
#[derive(Debug, Args, Clone)]
pub struct SeedsCommand {
    /// Placement policy ranking the candidate pool.
    #[arg(long, value_enum)]
    pub policy: PolicyArg,

    /// Number of seed nodes to select.
    #[arg(
        short = 'k',
        long = "count",
        default_value_t = DEFAULT_SEED_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub count: usize,

    /// Rank by directed metrics instead of undirected ones.
    #[arg(long)]
    pub directed: bool,

    /// Restrict the candidate pool to nodes carrying this cluster tag.
    #[arg(long)]
    pub cluster: Option<u32>,

    /// RNG seed for the `random` policy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Graph to score.
    #[command(subcommand)]
    pub source: GraphSource,
}

/// Generative models accepted by the `generate` command.
#[derive(Debug, Subcommand, Clone)]
pub enum GeneratorSource {
    /// Grow a Barabási–Albert preferential-attachment graph.
    Ba(BaArgs),
    /// Grow a Holme–Kim graph with tunable triad closure.
    Hk(HkArgs),
}

/// Graph sources accepted by the analysis commands.
#[derive(Debug, Subcommand, Clone)]
pub enum GraphSource {
    /// Grow a Barabási–Albert preferential-attachment graph.
    Ba(BaArgs),
    /// Grow a Holme–Kim graph with tunable triad closure.
    Hk(HkArgs),
    /// Load a graph from delimiter-separated edge-list files.
    Edgelist(EdgeListArgs),
}

/// Barabási–Albert growth arguments.
#[derive(Debug, Args, Clone)]
pub struct BaArgs {
    /// Number of nodes to grow.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edges attached from each new node.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENT)]
    pub attachment: usize,

    /// RNG seed overriding the built-in default.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Holme–Kim growth arguments.
#[derive(Debug, Args, Clone)]
pub struct HkArgs {
    /// Number of nodes to grow.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edges attached from each new node.
    #[arg(long, default_value_t = DEFAULT_ATTACHMENT)]
    pub attachment: usize,

    /// Probability of closing a triad after each preferential attachment.
    #[arg(long, default_value_t = DEFAULT_CLOSURE_PROBABILITY)]
    pub closure_probability: f64,

    /// RNG seed overriding the built-in default.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Edge-list ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct EdgeListArgs {
    /// Path to a file with one `source,target` row per line.
    #[arg(long)]
    pub links: PathBuf,

    /// Optional file with `label` or `label,cluster` rows declaring nodes.
    #[arg(long)]
    pub nodes: Option<PathBuf>,

    /// Override name for the source (defaults to the links file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Supported placement policies.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Uniform shuffle of the candidate pool.
    Random,
    /// Rank by degree centrality.
    Degree,
    /// Rank by propagation influence.
    Influence,
    /// Rank by betweenness centrality.
    Bridge,
}

impl PolicyArg {
    pub(super) fn into_policy(self, seed: Option<u64>) -> SeedPolicy {
        match self {
            Self::Random => SeedPolicy::Random {
                seed: seed.unwrap_or(DEFAULT_RANDOM_SEED),
            },
            Self::Degree => SeedPolicy::DegreeCentral,
            Self::Influence => SeedPolicy::Influence,
            Self::Bridge => SeedPolicy::Bridge,
        }
    }

    pub(super) fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Degree => "degree",
            Self::Influence => "influence",
            Self::Bridge => "bridge",
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input file.
    #[error("failed to open `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Graph synthesis or analysis failed.
    #[error(transparent)]
    Core(#[from] SeedcastError),
}

/// Output of one CLI command, ready to render.
#[derive(Debug, Clone)]
pub enum Report {
    /// Canonical graph payload.
    Graph(GraphReport),
    /// Per-node centrality rows.
    Metrics(MetricsReport),
    /// Ordered seed selection.
    Seeds(SeedsReport),
}

/// Payload emitted by the `generate` command.
#[derive(Debug, Clone)]
pub struct GraphReport {
    /// Name reported by the originating source.
    pub source: String,
    /// Canonical graph payload.
    pub payload: GraphPayload,
    /// Whether to pretty-print the JSON.
    pub pretty: bool,
}

/// Rows emitted by the `metrics` command.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    /// Name reported by the originating source.
    pub source: String,
    /// Node labels in id order; empty for generated graphs.
    pub labels: Vec<String>,
    /// One record per node in insertion order.
    pub records: Vec<CentralityRecord>,
}

/// Rows emitted by the `seeds` command.
#[derive(Debug, Clone)]
pub struct SeedsReport {
    /// Name reported by the originating source.
    pub source: String,
    /// Label of the policy that ranked the pool.
    pub policy: String,
    /// Selected nodes in rank order.
    pub rows: Vec<SeedRow>,
}

/// One selected seed node.
#[derive(Debug, Clone)]
pub struct SeedRow {
    /// Selected node.
    pub node: NodeId,
    /// Label for the node when the source provided one.
    pub label: Option<String>,
    /// Value of the ranking metric; absent under the random policy.
    pub score: Option<f64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading a source or running the pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use seedcast_cli::cli::{BaArgs, Cli, Command, GenerateCommand, GeneratorSource, Report, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         pretty: false,
///         model: GeneratorSource::Ba(BaArgs {
///             nodes: 12,
///             attachment: 2,
///             seed: Some(7),
///         }),
///     }),
/// };
/// let Report::Graph(report) = run_cli(cli)? else {
///     return Err("expected a graph report".into());
/// };
/// assert_eq!(report.payload.nodes.len(), 12);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            generate_command(command)
        }
        Command::Metrics(command) => {
            span.record("command", field::display("metrics"));
            metrics_command(command)
        }
        Command::Seeds(command) => {
            span.record("command", field::display("seeds"));
            seeds_command(command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(model = field::Empty, pretty = field::Empty),
)]
pub(super) fn generate_command(command: GenerateCommand) -> Result<Report, CliError> {
    let span = Span::current();
    span.record("pretty", field::display(command.pretty));
    let (name, graph) = match command.model {
        GeneratorSource::Ba(args) => {
            span.record("model", field::display("ba"));
            ("ba", grow_ba(&args)?)
        }
        GeneratorSource::Hk(args) => {
            span.record("model", field::display("hk"));
            ("hk", grow_hk(&args)?)
        }
    };
    info!(
        source = name,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(Report::Graph(GraphReport {
        source: name.to_owned(),
        payload: graph.to_payload(),
        pretty: command.pretty,
    }))
}

#[instrument(name = "cli.metrics", err, skip(command))]
pub(super) fn metrics_command(command: MetricsCommand) -> Result<Report, CliError> {
    let source = load_source(command.source)?;
    let metrics = compute_centrality(&source.graph);
    info!(
        source = source.name.as_str(),
        nodes = metrics.len(),
        "centrality computed"
    );
    Ok(Report::Metrics(MetricsReport {
        source: source.name,
        labels: source.labels,
        records: metrics.records().to_vec(),
    }))
}

#[instrument(
    name = "cli.seeds",
    err,
    skip(command),
    fields(policy = field::Empty, count = field::Empty, orientation = field::Empty),
)]
pub(super) fn seeds_command(command: SeedsCommand) -> Result<Report, CliError> {
    let orientation = if command.directed {
        Orientation::Directed
    } else {
        Orientation::Undirected
    };
    let span = Span::current();
    span.record("policy", field::display(command.policy.label()));
    span.record("count", field::display(command.count));
    span.record("orientation", field::display(orientation_label(orientation)));

    let source = load_source(command.source)?;
    let metrics = compute_centrality(&source.graph);
    let mut selector = SeedSelector::new(command.policy.into_policy(command.seed), command.count)
        .with_orientation(orientation);
    if let Some(tag) = command.cluster {
        selector = selector.with_cluster(tag);
    }
    let selected = selector.select(&source.graph, &metrics);
    info!(
        source = source.name.as_str(),
        selected = selected.len(),
        "seed selection completed"
    );

    let rows = selected
        .iter()
        .map(|&node| SeedRow {
            node,
            label: source.labels.get(node.index()).cloned(),
            score: metrics
                .get(node)
                .and_then(|record| ranking_score(command.policy, orientation, record)),
        })
        .collect();
    Ok(Report::Seeds(SeedsReport {
        source: source.name,
        policy: command.policy.label().to_owned(),
        rows,
    }))
}

/// Graph loaded from one of the CLI sources.
pub(super) struct SourceGraph {
    pub(super) name: String,
    pub(super) graph: Graph,
    pub(super) labels: Vec<String>,
}

#[instrument(
    name = "cli.load_source",
    err,
    skip(source),
    fields(source = field::Empty, nodes = field::Empty, edges = field::Empty),
)]
pub(super) fn load_source(source: GraphSource) -> Result<SourceGraph, CliError> {
    let span = Span::current();
    let loaded = match source {
        GraphSource::Ba(args) => {
            span.record("source", field::display("ba"));
            SourceGraph {
                name: "ba".to_owned(),
                graph: grow_ba(&args)?,
                labels: Vec::new(),
            }
        }
        GraphSource::Hk(args) => {
            span.record("source", field::display("hk"));
            SourceGraph {
                name: "hk".to_owned(),
                graph: grow_hk(&args)?,
                labels: Vec::new(),
            }
        }
        GraphSource::Edgelist(args) => {
            span.record("source", field::display("edgelist"));
            load_edge_list(args)?
        }
    };
    span.record("nodes", field::display(loaded.graph.node_count()));
    span.record("edges", field::display(loaded.graph.edge_count()));
    Ok(loaded)
}

fn grow_ba(args: &BaArgs) -> Result<Graph, CliError> {
    let mut model = BarabasiAlbert::new(args.nodes, args.attachment)?;
    if let Some(seed) = args.seed {
        model = model.with_rng_seed(seed);
    }
    Ok(model.generate())
}

fn grow_hk(args: &HkArgs) -> Result<Graph, CliError> {
    let mut model = HolmeKim::new(args.nodes, args.attachment, args.closure_probability)?;
    if let Some(seed) = args.seed {
        model = model.with_rng_seed(seed);
    }
    Ok(model.generate())
}

fn load_edge_list(args: EdgeListArgs) -> Result<SourceGraph, CliError> {
    let EdgeListArgs { links, nodes, name } = args;
    let chosen_name = derive_source_name(&links, name.as_deref());
    let links_reader = open_rows_reader(&links)?;
    let nodes_reader = nodes.as_deref().map(open_rows_reader).transpose()?;
    let source = EdgeListSource::try_from_readers(chosen_name, links_reader, nodes_reader)?;
    let name = source.name().to_owned();
    let (graph, labels) = source.into_parts();
    Ok(SourceGraph { name, graph, labels })
}

#[instrument(name = "cli.open_rows_reader", err, fields(path = field::Empty))]
pub(super) fn open_rows_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edgelist".to_owned())
}

/// Score shown next to a selected node, mirroring the selector's ranking.
pub(super) fn ranking_score(
    policy: PolicyArg,
    orientation: Orientation,
    record: &CentralityRecord,
) -> Option<f64> {
    match (policy, orientation) {
        (PolicyArg::Random, _) => None,
        (PolicyArg::Degree, Orientation::Directed) => Some(record.degree_out),
        (PolicyArg::Degree, Orientation::Undirected) => Some(record.degree_total),
        (PolicyArg::Influence, Orientation::Directed) => Some(record.pagerank),
        (PolicyArg::Influence, Orientation::Undirected) => Some(record.eigenvector),
        (PolicyArg::Bridge, _) => Some(record.betweenness),
    }
}

fn orientation_label(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Directed => "directed",
        Orientation::Undirected => "undirected",
    }
}

/// Renders `report` to `writer`.
///
/// Graph payloads render as JSON; metric and seed reports render as
/// tab-separated rows behind `#`-comment header lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use seedcast_cli::cli::{Report, SeedRow, SeedsReport, render_report};
/// # use seedcast_core::NodeId;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Report::Seeds(SeedsReport {
///     source: "demo".into(),
///     policy: "degree".into(),
///     rows: vec![SeedRow {
///         node: NodeId::new(3),
///         label: None,
///         score: Some(0.75),
///     }],
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("0\t3\t0.750000"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Graph(graph) => render_graph(graph, &mut writer),
        Report::Metrics(metrics) => render_metrics(metrics, &mut writer),
        Report::Seeds(seeds) => render_seeds(seeds, &mut writer),
    }
}

fn render_graph(report: &GraphReport, mut writer: impl Write) -> io::Result<()> {
    if report.pretty {
        serde_json::to_writer_pretty(&mut writer, &report.payload)?;
    } else {
        serde_json::to_writer(&mut writer, &report.payload)?;
    }
    writeln!(writer)
}

fn render_metrics(report: &MetricsReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "# source: {}", report.source)?;
    writeln!(
        writer,
        "node\tdegree_in\tdegree_out\tdegree_total\tbetweenness\tcloseness\teigenvector\tpagerank"
    )?;
    for record in &report.records {
        let name = display_name(&report.labels, record.node);
        writeln!(
            writer,
            "{name}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
            record.degree_in,
            record.degree_out,
            record.degree_total,
            record.betweenness,
            record.closeness,
            record.eigenvector,
            record.pagerank,
        )?;
    }
    Ok(())
}

fn render_seeds(report: &SeedsReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "# source: {}", report.source)?;
    writeln!(writer, "# policy: {}", report.policy)?;
    for (rank, row) in report.rows.iter().enumerate() {
        let name = row
            .label
            .clone()
            .unwrap_or_else(|| row.node.to_string());
        match row.score {
            Some(score) => writeln!(writer, "{rank}\t{name}\t{score:.6}")?,
            None => writeln!(writer, "{rank}\t{name}\t-")?,
        }
    }
    Ok(())
}

fn display_name(labels: &[String], node: NodeId) -> String {
    labels
        .get(node.index())
        .cloned()
        .unwrap_or_else(|| node.to_string())
}
