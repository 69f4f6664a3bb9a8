// Entry point: renders the dendrogram and exits.
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use dendroplot::app::{self, RunInputs};
use dendroplot::cli::Args;
use dendroplot::config::AppConfig;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut cfg = match &args.config {
        Some(path) => AppConfig::load_or_default(path),
        None => AppConfig::default(),
    };
    cfg.apply_args(&args);

    let inputs = RunInputs {
        linkage_path: args.linkage.as_ref().map(PathBuf::from),
        layout_json: args.layout_json.as_ref().map(PathBuf::from),
    };
    let report = app::run(&cfg, &inputs)?;
    println!(
        "Saved dendrogram ({} leaves, threshold {:.4}) to {}",
        report.n_leaves,
        report.color_threshold,
        report.output.display()
    );
    Ok(())
}
