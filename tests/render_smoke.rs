use std::fs;
use std::path::PathBuf;

use dendroplot::app::{self, RunInputs};
use dendroplot::config::AppConfig;
use dendroplot::core::dendrogram::LeafLabelMode;

fn unique_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "dendroplot_render_smoke_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn embedded_data_renders_to_svg() {
    let dir = unique_dir("embedded");
    let mut cfg = AppConfig::default();
    cfg.output.path = dir.join("test_dendro.svg").to_string_lossy().to_string();

    let report = app::run(&cfg, &RunInputs::default()).unwrap();
    assert_eq!(report.n_leaves, 138);
    assert_eq!(report.n_links, 137);
    assert_eq!(report.lookup_entries, 138);

    let svg = fs::read_to_string(&report.output).unwrap();
    assert!(svg.contains("width=\"1200\""));
    assert!(svg.contains("height=\"1000\""));
    assert_eq!(svg.matches("<polyline").count(), 137);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn text_linkage_and_layout_json() {
    let dir = unique_dir("text");
    fs::create_dir_all(&dir).unwrap();
    let linkage_path = dir.join("z.txt");
    fs::write(
        &linkage_path,
        "[[0, 1, 0.5, 2],\n [2, 3, 0.75, 2],\n [4, 5, 2.0, 4]]\n",
    )
    .unwrap();
    let json_path = dir.join("layout.json");

    let mut cfg = AppConfig::default();
    cfg.output.path = dir.join("tree.svg").to_string_lossy().to_string();
    cfg.dendrogram.leaf_labels = LeafLabelMode::Lookup;

    let inputs = RunInputs {
        linkage_path: Some(linkage_path),
        layout_json: Some(json_path.clone()),
    };
    let report = app::run(&cfg, &inputs).unwrap();
    assert_eq!(report.n_leaves, 4);
    assert!((report.color_threshold - 1.4).abs() < 1e-12);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["leaves"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["color_list"], serde_json::json!(["C1", "C2", "C0"]));
    // Embedded lookup: leaf 0 is position 4562 with count 1.
    assert_eq!(json["ivl"][0], "(1, 4562)");

    let svg = fs::read_to_string(dir.join("tree.svg")).unwrap();
    assert_eq!(svg.matches("<text").count(), 4);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_linkage_is_an_error() {
    let dir = unique_dir("bad");
    fs::create_dir_all(&dir).unwrap();
    let linkage_path = dir.join("z.txt");
    fs::write(&linkage_path, "0 1 0.5 3\n").unwrap();

    let mut cfg = AppConfig::default();
    cfg.output.path = dir.join("never.svg").to_string_lossy().to_string();
    let inputs = RunInputs {
        linkage_path: Some(linkage_path),
        layout_json: None,
    };
    let err = app::run(&cfg, &inputs).unwrap_err();
    assert!(format!("{err:#}").contains("claims 3 members"));
    assert!(!dir.join("never.svg").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn failed_layout_write_leaves_no_svg() {
    let dir = unique_dir("json_fail");
    fs::create_dir_all(&dir).unwrap();

    let mut cfg = AppConfig::default();
    cfg.output.path = dir.join("tree.svg").to_string_lossy().to_string();
    let inputs = RunInputs {
        linkage_path: None,
        // parent directory does not exist, so the write fails
        layout_json: Some(dir.join("missing").join("layout.json")),
    };
    let err = app::run(&cfg, &inputs).unwrap_err();
    assert!(format!("{err:#}").contains("writing layout"));
    assert!(!dir.join("tree.svg").exists());

    let _ = fs::remove_dir_all(&dir);
}
