//! SVG rendering of a [`DendrogramLayout`] with plotters.
//!
//! Axes are hidden and the plot area fills the figure. When leaf labels are
//! requested a strip below the tree is reserved for them.

use std::fs::create_dir_all;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;
use tracing::debug;

use crate::core::dendrogram::{DendrogramLayout, LEAF_SPACING};
use crate::core::palette;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("render: figure size {width}x{height} px is empty")]
    EmptyFigure { width: u32, height: u32 },

    #[error("render: unknown color {0:?}")]
    UnknownColor(String),

    #[error("render: drawing failed: {0}")]
    Drawing(String),

    #[error("render: {0}")]
    Io(#[from] std::io::Error),
}

fn drawing<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing(err.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureSpec {
    pub width_px: u32,
    pub height_px: u32,
    pub line_width: u32,
    /// Height of the label strip, used only when labels are drawn.
    pub label_area_px: u32,
    pub label_font_px: u32,
}

impl FigureSpec {
    pub fn new(size: (u32, u32), line_width: u32) -> Self {
        Self {
            width_px: size.0,
            height_px: size.1,
            line_width,
            label_area_px: (size.1 / 8).max(40),
            label_font_px: 10,
        }
    }

    fn check(&self) -> Result<(), RenderError> {
        if self.width_px == 0 || self.height_px == 0 {
            return Err(RenderError::EmptyFigure {
                width: self.width_px,
                height: self.height_px,
            });
        }
        Ok(())
    }
}

/// Render to an SVG file. Parent directories are created as needed.
pub fn render_svg_file(
    path: &Path,
    layout: &DendrogramLayout,
    labels: &[String],
    spec: &FigureSpec,
) -> Result<(), RenderError> {
    spec.check()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    let root = SVGBackend::new(path, (spec.width_px, spec.height_px)).into_drawing_area();
    draw_dendrogram(&root, layout, labels, spec)?;
    root.present().map_err(drawing)?;
    debug!(path = %path.display(), "svg written");
    Ok(())
}

/// Render to an in-memory SVG document.
pub fn render_svg_string(
    layout: &DendrogramLayout,
    labels: &[String],
    spec: &FigureSpec,
) -> Result<String, RenderError> {
    spec.check()?;
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (spec.width_px, spec.height_px))
            .into_drawing_area();
        draw_dendrogram(&root, layout, labels, spec)?;
        root.present().map_err(drawing)?;
    }
    Ok(buf)
}

fn draw_dendrogram<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &DendrogramLayout,
    labels: &[String],
    spec: &FigureSpec,
) -> Result<(), RenderError> {
    // Resolve every color up front so a bad code fails before drawing.
    let styles = layout
        .color_list
        .iter()
        .map(|code| {
            palette::resolve(code)
                .map(|(r, g, b)| RGBColor(r, g, b).stroke_width(spec.line_width))
                .ok_or_else(|| RenderError::UnknownColor(code.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    root.fill(&WHITE).map_err(drawing)?;

    let label_area = if labels.is_empty() {
        0
    } else {
        spec.label_area_px.min(spec.height_px / 2)
    };
    let plot_height = spec.height_px - label_area;
    let (plot_area, _) = root.split_vertically(plot_height as i32);

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(0)
        .build_cartesian_2d(0.0..layout.x_extent(), 0.0..layout.y_extent())
        .map_err(drawing)?;

    chart
        .draw_series(
            layout
                .icoord
                .iter()
                .zip(layout.dcoord.iter())
                .zip(styles)
                .map(|((xs, ys), style)| {
                    let points: Vec<(f64, f64)> =
                        xs.iter().copied().zip(ys.iter().copied()).collect();
                    PathElement::new(points, style)
                }),
        )
        .map_err(drawing)?;

    if !labels.is_empty() {
        let style = TextStyle::from(("sans-serif", spec.label_font_px).into_font())
            .transform(FontTransform::Rotate90)
            .pos(Pos::new(HPos::Left, VPos::Center));
        for (slot, label) in labels.iter().enumerate() {
            let x = LEAF_SPACING * (slot as f64 + 0.5);
            let (px, _) = chart.backend_coord(&(x, 0.0));
            root.draw(&Text::new(
                label.as_str(),
                (px, plot_height as i32 + 4),
                style.clone(),
            ))
            .map_err(drawing)?;
        }
    }

    debug!(
        links = layout.icoord.len(),
        labels = labels.len(),
        "dendrogram drawn"
    );
    Ok(())
}
