//! Pipeline: linkage + position table → leaf lookup → layout → SVG.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::core::dendrogram::{DendrogramLayout, LayoutOptions};
use crate::core::linkage::Linkage;
use crate::core::lookup::{LeafLookup, PositionTable};
use crate::data;
use crate::render::{self, FigureSpec};

/// Where the inputs come from and which optional outputs to write.
#[derive(Clone, Debug, Default)]
pub struct RunInputs {
    /// Text linkage table; the embedded table when `None`.
    pub linkage_path: Option<PathBuf>,
    pub layout_json: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub output: PathBuf,
    pub n_leaves: usize,
    pub n_links: usize,
    pub color_threshold: f64,
    pub lookup_entries: usize,
}

pub fn load_linkage(path: Option<&Path>) -> Result<Linkage> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("reading linkage table {}", p.display()))?;
            Linkage::parse(&text).with_context(|| format!("parsing linkage table {}", p.display()))
        }
        None => data::linkage().context("embedded linkage table"),
    }
}

/// Run every stage with the embedded position table.
///
/// The layout JSON is serialized before the SVG is drawn. If writing the JSON
/// fails afterwards the SVG is removed, so a failed run leaves no output.
pub fn run(cfg: &AppConfig, inputs: &RunInputs) -> Result<RunReport> {
    run_with_positions(cfg, inputs, &data::position_table())
}

pub fn run_with_positions(
    cfg: &AppConfig,
    inputs: &RunInputs,
    positions: &PositionTable,
) -> Result<RunReport> {
    let linkage = load_linkage(inputs.linkage_path.as_deref())?;
    info!(
        leaves = linkage.n_leaves(),
        max_distance = linkage.max_distance(),
        "linkage loaded"
    );

    let lookup = LeafLookup::build(positions);
    if lookup.overwritten() > 0 {
        debug!(
            overwritten = lookup.overwritten(),
            "leaf lookup kept later entries for shared leaf indices"
        );
    }

    let opts = LayoutOptions {
        color_threshold: linkage.color_threshold(cfg.dendrogram.color_threshold_ratio),
        above_threshold_color: cfg.dendrogram.above_threshold_color.clone(),
    };
    let layout = DendrogramLayout::compute(&linkage, &opts);
    let labels = layout.leaf_labels(cfg.dendrogram.leaf_labels, &lookup);

    let layout_json = match &inputs.layout_json {
        Some(path) => Some((path, layout_json_text(&layout, &labels)?)),
        None => None,
    };

    let spec = FigureSpec::new(cfg.figure.size_px(), cfg.dendrogram.line_width);
    let output = PathBuf::from(&cfg.output.path);
    render::render_svg_file(&output, &layout, &labels, &spec)
        .with_context(|| format!("rendering {}", output.display()))?;

    if let Some((json_path, text)) = layout_json {
        if let Err(err) = fs::write(json_path, text) {
            if let Err(rm_err) = fs::remove_file(&output) {
                warn!(path = %output.display(), "failed to remove svg: {rm_err}");
            }
            return Err(err).with_context(|| format!("writing layout {}", json_path.display()));
        }
        info!(path = %json_path.display(), "layout written");
    }
    info!(path = %output.display(), threshold = opts.color_threshold, "dendrogram saved");

    Ok(RunReport {
        output,
        n_leaves: layout.leaves.len(),
        n_links: layout.icoord.len(),
        color_threshold: opts.color_threshold,
        lookup_entries: lookup.len(),
    })
}

fn layout_json_text(layout: &DendrogramLayout, labels: &[String]) -> Result<String> {
    let ivl: Vec<String> = if labels.is_empty() {
        layout.leaves.iter().map(|l| l.to_string()).collect()
    } else {
        labels.to_vec()
    };
    let mut value = serde_json::to_value(layout).context("serializing layout")?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("ivl".to_string(), serde_json::json!(ivl));
    }
    serde_json::to_string_pretty(&value).context("serializing layout")
}
