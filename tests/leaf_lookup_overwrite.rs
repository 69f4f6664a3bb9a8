use dendroplot::core::lookup::{LeafLabel, LeafLookup, PositionTable};
use dendroplot::data;

#[test]
fn shared_leaf_keeps_later_position() {
    let table = PositionTable::from_literal(&[(10, &[("A", (2, 5))]), (20, &[("B", (3, 5))])]);
    let lookup = LeafLookup::build(&table);

    assert_eq!(lookup.len(), 1);
    assert_eq!(
        lookup.get(5),
        Some(&LeafLabel {
            count: 3,
            position: 20
        })
    );
    assert_eq!(lookup.overwritten(), 1);
}

#[test]
fn embedded_table_projects_every_triple() {
    let table = data::position_table();
    let lookup = LeafLookup::build(&table);

    for (position, _variant, tally) in table.triples() {
        let label = lookup.get(tally.leaf).expect("leaf present");
        assert_eq!(label.count, tally.count);
        assert_eq!(label.position, position);
    }
    // 4541 carries two variants on distinct leaves
    assert_eq!(lookup.get(95).map(|l| l.position), Some(4541));
    assert_eq!(lookup.get(96).map(|l| (l.count, l.position)), Some((5, 4541)));
}
