//! core/dendrogram.rs — Dendrogram layout from a linkage table.
//!
//! Walks the merge tree from the root, left child first. Leaves sit at
//! `x = 5, 15, 25, ...`; each merge becomes a U-shaped link
//! `icoord = [xa, xa, xb, xb]`, `dcoord = [ha, h, h, hb]`.
//!
//! Threshold coloring: a link with height `>= threshold` gets the
//! above-threshold color. Every maximal subtree below the threshold gets the
//! next palette color, cycling through `C1..C9`.

use serde::Serialize;
use tracing::debug;

use crate::core::linkage::Linkage;
use crate::core::lookup::LeafLookup;
use crate::core::palette::LINK_COLORS;

/// Horizontal room reserved per leaf.
pub const LEAF_SPACING: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Merge height at which links stop sharing a cluster color.
    pub color_threshold: f64,
    /// Color code for links at or above the threshold.
    pub above_threshold_color: String,
}

impl LayoutOptions {
    /// Threshold as `ratio × max merge distance` of `linkage`.
    pub fn with_ratio(linkage: &Linkage, ratio: f64) -> Self {
        Self {
            color_threshold: linkage.color_threshold(ratio),
            above_threshold_color: LINK_COLORS.above_threshold.to_string(),
        }
    }
}

/// How leaves are labelled in the output.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LeafLabelMode {
    #[default]
    None,
    Index,
    Lookup,
}

#[derive(Clone, Debug, Serialize)]
pub struct DendrogramLayout {
    pub icoord: Vec<[f64; 4]>,
    pub dcoord: Vec<[f64; 4]>,
    pub color_list: Vec<String>,
    /// Leaf ids, left to right.
    pub leaves: Vec<usize>,
    pub color_threshold: f64,
    /// Tallest merge in the tree.
    pub max_height: f64,
}

#[derive(Clone, Copy, Debug)]
struct Subtree {
    x: f64,
    width: f64,
    height: f64,
    max_height: f64,
}

enum Step {
    Enter { id: usize, iv: f64 },
    BetweenChildren { id: usize, iv: f64 },
    Exit { id: usize, color: String },
}

/// Tracks which palette color the next below-threshold subtree receives.
struct ColorCursor<'a> {
    above: &'a str,
    threshold: f64,
    current: usize,
    below: bool,
}

impl ColorCursor<'_> {
    fn color_for(&mut self, height: f64) -> String {
        if height >= self.threshold || self.threshold <= 0.0 {
            if self.below {
                self.current = (self.current + 1) % LINK_COLORS.palette.len();
            }
            self.below = false;
            self.above.to_string()
        } else {
            self.below = true;
            LINK_COLORS.palette[self.current].to_string()
        }
    }
}

impl DendrogramLayout {
    /// Lay out every merge in `linkage`.
    pub fn compute(linkage: &Linkage, opts: &LayoutOptions) -> Self {
        let n_links = linkage.rows().len();
        let mut icoord = Vec::with_capacity(n_links);
        let mut dcoord = Vec::with_capacity(n_links);
        let mut color_list = Vec::with_capacity(n_links);
        let mut leaves = Vec::with_capacity(linkage.n_leaves());

        let mut cursor = ColorCursor {
            above: &opts.above_threshold_color,
            threshold: opts.color_threshold,
            current: 0,
            below: false,
        };

        // Explicit stack: chained merges can nest as deep as the leaf count.
        let mut steps = vec![Step::Enter {
            id: linkage.root(),
            iv: 0.0,
        }];
        let mut done: Vec<Subtree> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter { id, iv } => match linkage.row_of(id) {
                    Some(row) => {
                        steps.push(Step::BetweenChildren { id, iv });
                        steps.push(Step::Enter { id: row.left, iv });
                    }
                    None => {
                        leaves.push(id);
                        done.push(Subtree {
                            x: iv + LEAF_SPACING / 2.0,
                            width: LEAF_SPACING,
                            height: 0.0,
                            max_height: 0.0,
                        });
                    }
                },
                Step::BetweenChildren { id, iv } => {
                    let Some(row) = linkage.row_of(id) else {
                        continue;
                    };
                    let left_width = done.last().map_or(0.0, |s| s.width);
                    let color = cursor.color_for(row.distance);
                    steps.push(Step::Exit { id, color });
                    steps.push(Step::Enter {
                        id: row.right,
                        iv: iv + left_width,
                    });
                }
                Step::Exit { id, color } => {
                    let (Some(right), Some(left)) = (done.pop(), done.pop()) else {
                        continue;
                    };
                    let h = linkage.row_of(id).map_or(0.0, |r| r.distance);
                    icoord.push([left.x, left.x, right.x, right.x]);
                    dcoord.push([left.height, h, h, right.height]);
                    color_list.push(color);
                    done.push(Subtree {
                        x: (left.x + right.x) / 2.0,
                        width: left.width + right.width,
                        height: h,
                        max_height: left.max_height.max(right.max_height).max(h),
                    });
                }
            }
        }

        let max_height = done.last().map_or(0.0, |s| s.max_height);
        debug!(
            links = icoord.len(),
            leaves = leaves.len(),
            threshold = opts.color_threshold,
            "dendrogram laid out"
        );

        Self {
            icoord,
            dcoord,
            color_list,
            leaves,
            color_threshold: opts.color_threshold,
            max_height,
        }
    }

    /// Data extent along x: `[0, 10 × leaves]`.
    pub fn x_extent(&self) -> f64 {
        self.leaves.len() as f64 * LEAF_SPACING
    }

    /// Data extent along y with 5% headroom above the tallest merge.
    pub fn y_extent(&self) -> f64 {
        let top = self.max_height + self.max_height * 0.05;
        if top > 0.0 { top } else { 1.0 }
    }

    /// Leaf label text, left to right.
    pub fn leaf_labels(&self, mode: LeafLabelMode, lookup: &LeafLookup) -> Vec<String> {
        match mode {
            LeafLabelMode::None => Vec::new(),
            LeafLabelMode::Index => self.leaves.iter().map(|l| l.to_string()).collect(),
            LeafLabelMode::Lookup => self.leaves.iter().map(|&l| lookup.label_for(l)).collect(),
        }
    }
}
