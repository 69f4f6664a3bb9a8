use crate::cli::Args;
use crate::core::dendrogram::LeafLabelMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(default = "FigureConfig::default_width_in")]
    pub width_in: f64,
    #[serde(default = "FigureConfig::default_height_in")]
    pub height_in: f64,
    #[serde(default = "FigureConfig::default_dpi")]
    pub dpi: u32,
}

impl FigureConfig {
    fn default_width_in() -> f64 {
        12.0
    }
    fn default_height_in() -> f64 {
        10.0
    }
    fn default_dpi() -> u32 {
        100
    }

    /// Figure size in pixels.
    pub fn size_px(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(0.0) as u32;
        (px(self.width_in), px(self.height_in))
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: Self::default_width_in(),
            height_in: Self::default_height_in(),
            dpi: Self::default_dpi(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DendrogramConfig {
    #[serde(default = "DendrogramConfig::default_color_threshold_ratio")]
    pub color_threshold_ratio: f64,
    #[serde(default = "DendrogramConfig::default_above_threshold_color")]
    pub above_threshold_color: String,
    #[serde(default)]
    pub leaf_labels: LeafLabelMode,
    #[serde(default = "DendrogramConfig::default_line_width")]
    pub line_width: u32,
}

impl DendrogramConfig {
    fn default_color_threshold_ratio() -> f64 {
        0.7
    }
    fn default_above_threshold_color() -> String {
        "C0".to_string()
    }
    fn default_line_width() -> u32 {
        1
    }
}

impl Default for DendrogramConfig {
    fn default() -> Self {
        Self {
            color_threshold_ratio: Self::default_color_threshold_ratio(),
            above_threshold_color: Self::default_above_threshold_color(),
            leaf_labels: LeafLabelMode::default(),
            line_width: Self::default_line_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "OutputConfig::default_path")]
    pub path: String,
}

impl OutputConfig {
    fn default_path() -> String {
        "test_dendro.svg".to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub figure: FigureConfig,
    #[serde(default)]
    pub dendrogram: DendrogramConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    fn format_f64_compact(x: f64) -> String {
        let mut s = format!("{:.6}", x);
        while s.contains('.') && s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        if s.is_empty() { "0".to_string() } else { s }
    }

    /// Command-line flags take precedence over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(path) = &args.output {
            self.output.path = path.clone();
        }
        if let Some(ratio) = args.threshold_ratio {
            self.dendrogram.color_threshold_ratio = ratio;
        }
        if let Some(mode) = args.leaf_labels {
            self.dendrogram.leaf_labels = mode;
        }
    }

    /// Defaults serialized as TOML with every value commented out.
    fn commented_defaults() -> Option<String> {
        let text = toml::to_string_pretty(&Self::default()).ok()?;
        let mut commented = String::new();
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                commented.push('\n');
            } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
                commented.push_str(line);
                commented.push('\n');
            } else {
                let mut out_line = line.to_string();
                if let Some((lhs, rhs)) = line.split_once('=') {
                    let rhs_trim = rhs.trim();
                    if rhs_trim.contains('.') && !rhs_trim.contains('"') {
                        if let Ok(val) = rhs_trim.parse::<f64>() {
                            let mut formatted = Self::format_f64_compact(val);
                            if !formatted.contains('.') {
                                formatted.push_str(".0");
                            }
                            out_line = format!("{} = {}", lhs.trim(), formatted);
                        }
                    }
                }
                commented.push_str("# ");
                commented.push_str(&out_line);
                commented.push('\n');
            }
        }
        Some(commented)
    }

    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if path_obj.exists() {
            match fs::read_to_string(path_obj) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => {
                        warn!("Failed to parse config {path}: {err}. Using defaults.");
                    }
                },
                Err(err) => {
                    warn!("Failed to read config {path}: {err}. Using defaults.");
                }
            }
            return Self::default();
        }

        // File does not exist: write defaults and return them.
        match Self::commented_defaults() {
            Some(commented) => match fs::write(path_obj, commented) {
                Ok(()) => info!("Wrote default config to {path}"),
                Err(err) => warn!("Failed to write default config to {path}: {err}"),
            },
            None => warn!("Failed to serialize default config; continuing with defaults"),
        }
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn unique_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!(
            "dendroplot_config_test_{}_{}",
            name,
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        p
    }

    #[test]
    fn load_or_default_writes_defaults_cleanly() {
        let path = unique_path("defaults.toml");
        let path_str = path.to_string_lossy().to_string();
        let _ = fs::remove_file(&path);

        let cfg = AppConfig::load_or_default(&path_str);
        assert!(path.exists(), "config file should be created");
        assert_eq!(cfg.figure.size_px(), (1200, 1000));
        assert_eq!(cfg.dendrogram.color_threshold_ratio, 0.7);
        assert_eq!(cfg.dendrogram.above_threshold_color, "C0");
        assert_eq!(cfg.dendrogram.leaf_labels, LeafLabelMode::None);
        assert_eq!(cfg.output.path, "test_dendro.svg");

        let contents = fs::read_to_string(&path).expect("read written config");
        assert!(
            contents.contains("# color_threshold_ratio = 0.7"),
            "should write commented color_threshold_ratio"
        );
        assert!(
            contents.contains("# width_in = 12.0"),
            "should write commented width_in"
        );
        assert!(
            contents.contains("# leaf_labels = \"none\""),
            "should write commented leaf_labels"
        );
        assert!(contents.contains("[output]"));

        // The commented file parses back to defaults.
        let reread = AppConfig::load_or_default(&path_str);
        assert_eq!(reread.output.path, "test_dendro.svg");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_reads_partial_file() {
        let path = unique_path("partial.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(
            &path,
            "[dendrogram]\ncolor_threshold_ratio = 0.4\nleaf_labels = \"lookup\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.dendrogram.color_threshold_ratio, 0.4);
        assert_eq!(cfg.dendrogram.leaf_labels, LeafLabelMode::Lookup);
        assert_eq!(cfg.dendrogram.line_width, 1);
        assert_eq!(cfg.figure.dpi, 100);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_or_default_falls_back_on_bad_toml() {
        let path = unique_path("bad.toml");
        let path_str = path.to_string_lossy().to_string();
        fs::write(&path, "[figure\nwidth_in = ").unwrap();

        let cfg = AppConfig::load_or_default(&path_str);
        assert_eq!(cfg.figure.width_in, 12.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn args_override_file_values() {
        let mut cfg = AppConfig::default();
        let args = Args::parse_from([
            "dendroplot",
            "--output",
            "out/tree.svg",
            "--threshold-ratio",
            "0.4",
            "--leaf-labels",
            "index",
        ]);
        cfg.apply_args(&args);
        assert_eq!(cfg.output.path, "out/tree.svg");
        assert_eq!(cfg.dendrogram.color_threshold_ratio, 0.4);
        assert_eq!(cfg.dendrogram.leaf_labels, LeafLabelMode::Index);
    }
}
