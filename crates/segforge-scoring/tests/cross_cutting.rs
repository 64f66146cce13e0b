//! Cross-cutting tests for composed scoring trees, against an in-memory
//! statistics table.

use float_cmp::assert_approx_eq;

use segforge_core::{CompositionError, EdgeId, StatisticUnit};
use segforge_test::TableSource;

use segforge_scoring::function::ScoreFunction;
use segforge_scoring::leaf::Constant;
use segforge_scoring::ScoreFunctionExt;

fn seeded_table() -> TableSource {
    let table = TableSource::new();
    for e in 0..4u64 {
        table.set(EdgeId::new(e), "mean_affinity", 0.1 * (e as f32 + 1.0));
        table.set(EdgeId::new(e), "contact_area", 50.0 * e as f32);
        table.set(EdgeId::new(e), "region_size", 10.0 + e as f32);
    }
    table
}

#[test]
fn test_add_over_constants_is_edge_independent() {
    let sum = Constant::new(0.3f32).add(Constant::new(0.4)).unwrap();
    for e in [0, 1, 17, 4096] {
        assert_approx_eq!(f32, sum.score(EdgeId::new(e)), 0.7, ulps = 2);
    }
}

#[test]
fn test_safe_divide_by_zero_leaf_saturates() {
    let quotient = Constant::new(1.0f32)
        .safe_divide(Constant::new(0.0))
        .unwrap();
    let score = quotient.score(EdgeId::new(0));
    assert_eq!(score, f32::MAX);
    assert!(score.is_finite());
}

#[test]
fn test_affinity_priority_tree() {
    // 1 - mean_affinity: the classic min-ordered merge priority.
    let table = seeded_table();
    let priority = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .one_minus();
    assert_approx_eq!(f32, priority.score(EdgeId::new(0)), 0.9, ulps = 2);
    assert_approx_eq!(f32, priority.score(EdgeId::new(3)), 0.6, ulps = 2);
}

#[test]
fn test_nested_tree_reads_each_leaf_exactly_once_per_call() {
    let table = seeded_table();
    let f = table.leaf("mean_affinity", StatisticUnit::Affinity);
    let g = table.leaf("region_size", StatisticUnit::Count);
    let tree = f.multiply(g.invert()).unwrap().one_minus();

    table.reset_reads();
    let edge = EdgeId::new(2);
    let score = tree.score(edge);
    assert_eq!(table.reads("mean_affinity"), 1);
    assert_eq!(table.reads("region_size"), 1);
    assert_approx_eq!(f32, score, 1.0 - 0.3 / 12.0, ulps = 4);

    // A second call re-reads; nothing is cached.
    tree.score(edge);
    assert_eq!(table.reads("mean_affinity"), 2);
    assert_eq!(table.reads("region_size"), 2);
}

#[test]
fn test_merge_grouping_does_not_change_the_tree() {
    let table = seeded_table();
    let edge = EdgeId::new(1);

    let left_grouped = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .add(table.leaf("contact_area", StatisticUnit::Area))
        .unwrap()
        .add(table.leaf("region_size", StatisticUnit::Count))
        .unwrap();
    let right_grouped = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .add(
            table
                .leaf("contact_area", StatisticUnit::Area)
                .add(table.leaf("region_size", StatisticUnit::Count))
                .unwrap(),
        )
        .unwrap();

    assert_eq!(left_grouped.capabilities(), right_grouped.capabilities());
    assert_approx_eq!(
        f32,
        left_grouped.score(edge),
        right_grouped.score(edge),
        ulps = 2
    );
}

#[test]
fn test_composite_capabilities_are_the_union_of_leaves() {
    let table = seeded_table();
    let tree = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .one_minus()
        .safe_divide(
            table
                .leaf("contact_area", StatisticUnit::Area)
                .add(Constant::new(1.0))
                .unwrap(),
        )
        .unwrap();

    let caps = tree.capabilities();
    assert_eq!(caps.len(), 2);
    assert!(caps.contains("mean_affinity"));
    assert!(caps.contains("contact_area"));
}

#[test]
fn test_conflicting_leaves_fail_at_composition_time() {
    let table = seeded_table();
    let as_area = table.leaf("contact_area", StatisticUnit::Area);
    let as_distance = table.leaf("contact_area", StatisticUnit::Distance);
    let err = as_area.add(as_distance).unwrap_err();
    assert!(matches!(
        err,
        CompositionError::CapabilityConflict { name, .. } if name == "contact_area"
    ));
}

#[test]
fn test_scores_reflect_statistics_updated_between_calls() {
    let table = seeded_table();
    let edge = EdgeId::new(0);
    let priority = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .one_minus();

    assert_approx_eq!(f32, priority.score(edge), 0.9, ulps = 2);

    // A merge event folds new affinity into the surviving edge.
    table.set(edge, "mean_affinity", 0.8);
    assert_approx_eq!(f32, priority.score(edge), 0.2, ulps = 8);
}

#[test]
fn test_step_against_constant_threshold() {
    let table = seeded_table();
    let gate = table
        .leaf("mean_affinity", StatisticUnit::Affinity)
        .step(Constant::new(0.3))
        .unwrap();

    assert_eq!(gate.score(EdgeId::new(0)), 0.0); // 0.1 < 0.3
    assert_eq!(gate.score(EdgeId::new(2)), 1.0); // 0.3 >= 0.3
    assert_eq!(gate.score(EdgeId::new(3)), 1.0); // 0.4 >= 0.3
}

#[test]
fn test_saturating_radius_over_area_leaf() {
    let table = TableSource::new();
    let edge = EdgeId::new(0);
    table.set(edge, "contact_area", 0.0);
    let response = table
        .leaf("contact_area", StatisticUnit::Area)
        .saturating_radius();

    assert_eq!(response.score(edge), 127.0);

    table.set(edge, "contact_area", 1e12);
    let bound = 128.0 * (35.0f32 / 12.5).tanh() + 127.0;
    assert_eq!(response.score(edge), bound);
}

#[test]
fn test_boxed_nodes_compose_like_concrete_ones() {
    let table = seeded_table();
    let boxed: Box<dyn ScoreFunction<Value = f32> + '_> =
        Box::new(table.leaf("mean_affinity", StatisticUnit::Affinity));
    let tree = boxed.one_minus();
    assert_approx_eq!(f32, tree.score(EdgeId::new(1)), 0.8, ulps = 8);
    assert!(tree.capabilities().contains("mean_affinity"));
}
