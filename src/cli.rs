use crate::core::dendrogram::LeafLabelMode;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML (written with commented defaults if missing)
    #[arg(long)]
    pub config: Option<String>,

    /// Output SVG path (overrides config)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Read the linkage table from a text file instead of the embedded one
    #[arg(long, value_name = "PATH")]
    pub linkage: Option<String>,

    /// Color threshold as a fraction of the largest merge distance (overrides config)
    #[arg(long)]
    pub threshold_ratio: Option<f64>,

    /// Leaf labels to draw under the tree (overrides config)
    #[arg(long, value_enum)]
    pub leaf_labels: Option<LeafLabelMode>,

    /// Also write the computed layout as JSON
    #[arg(long, value_name = "PATH")]
    pub layout_json: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
