use approx::assert_relative_eq;
use dendroplot::core::dendrogram::{DendrogramLayout, LayoutOptions};
use dendroplot::data;

#[test]
fn color_threshold_is_seventy_percent_of_max_distance() {
    let z = data::linkage().unwrap();
    let max = data::LINKAGE_ROWS
        .iter()
        .map(|r| r.distance)
        .fold(f64::MIN, f64::max);
    assert_relative_eq!(max, 4.107016543362054);
    assert_relative_eq!(z.color_threshold(0.7), 0.7 * max);

    let opts = LayoutOptions::with_ratio(&z, 0.7);
    assert_relative_eq!(opts.color_threshold, 0.7 * max);
    assert_eq!(opts.above_threshold_color, "C0");
}

#[test]
fn layout_places_every_leaf_once() {
    let z = data::linkage().unwrap();
    let layout = DendrogramLayout::compute(&z, &LayoutOptions::with_ratio(&z, 0.7));

    assert_eq!(layout.icoord.len(), 137);
    assert_eq!(layout.dcoord.len(), 137);
    assert_eq!(layout.color_list.len(), 137);

    let mut leaves = layout.leaves.clone();
    leaves.sort_unstable();
    assert_eq!(leaves, (0..138).collect::<Vec<_>>());

    assert_relative_eq!(layout.max_height, 4.107016543362054);
    assert_relative_eq!(layout.x_extent(), 1380.0);

    // Root link is emitted last and spans the two top clusters.
    let root = layout.dcoord.last().unwrap();
    assert_relative_eq!(root[1], 4.107016543362054);
    assert_eq!(layout.color_list.last().map(String::as_str), Some("C0"));
}

#[test]
fn link_heights_match_merge_distances() {
    let z = data::linkage().unwrap();
    let layout = DendrogramLayout::compute(&z, &LayoutOptions::with_ratio(&z, 0.7));

    let mut heights: Vec<f64> = layout.dcoord.iter().map(|d| d[1]).collect();
    let mut distances: Vec<f64> = z.rows().iter().map(|r| r.distance).collect();
    heights.sort_by(f64::total_cmp);
    distances.sort_by(f64::total_cmp);
    assert_eq!(heights, distances);

    for (xs, ds) in layout.icoord.iter().zip(layout.dcoord.iter()) {
        assert_eq!(xs[0], xs[1]);
        assert_eq!(xs[2], xs[3]);
        assert!(xs[0] < xs[2]);
        assert!(ds[0] <= ds[1] && ds[3] <= ds[2]);
    }
}

#[test]
fn colors_split_at_threshold() {
    let z = data::linkage().unwrap();
    let layout = DendrogramLayout::compute(&z, &LayoutOptions::with_ratio(&z, 0.7));
    for (ds, color) in layout.dcoord.iter().zip(layout.color_list.iter()) {
        if ds[1] >= layout.color_threshold {
            assert_eq!(color, "C0");
        } else {
            assert_ne!(color, "C0");
        }
    }
}
