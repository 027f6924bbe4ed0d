//! Command-line interface orchestration for seedcast.
//!
//! The CLI offers three commands: `generate` grows a synthetic graph and
//! emits the canonical JSON payload, `metrics` scores every node on the
//! seven centrality metrics, and `seeds` runs the full pipeline to select
//! seed nodes under a placement policy. Analysis commands accept generated
//! and edge-list sources alike.

mod commands;

pub use commands::{
    BaArgs, Cli, CliError, Command, EdgeListArgs, GenerateCommand, GeneratorSource, GraphReport,
    GraphSource, HkArgs, MetricsCommand, MetricsReport, PolicyArg, Report, SeedRow, SeedsCommand,
    SeedsReport, render_report, run_cli,
};
