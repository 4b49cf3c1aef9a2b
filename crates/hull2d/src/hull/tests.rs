use super::*;
use crate::geom2::{find_pivot, orientation, sort_by_angle, Turn};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn pts(coords: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    coords.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

fn hull(coords: &[(f64, f64)], mode: DegeneracyMode) -> Result<HullBoundary> {
    compute_convex_hull(&pts(coords), HullMethod::GrahamScan, mode)
}

#[test]
fn square_with_center_excludes_center() {
    let h = hull(
        &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)],
        DegeneracyMode::Reduce,
    )
    .unwrap();
    assert_eq!(
        h.vertices,
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    );
    assert!(h.is_convex());
    assert!((h.signed_area() - 1.0).abs() < 1e-12);
}

#[test]
fn collinear_edge_point_is_reduced() {
    let input = [(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
    let kept = hull(&input, DegeneracyMode::Keep).unwrap();
    assert_eq!(kept.vertices, pts(&input));
    let reduced = hull(&input, DegeneracyMode::Reduce).unwrap();
    assert_eq!(
        reduced.vertices,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
}

#[test]
fn triangle_is_returned_whole() {
    let input = [(0.0, 4.0), (4.0, 0.0), (0.0, 0.0)];
    for mode in [DegeneracyMode::Keep, DegeneracyMode::Reduce] {
        let h = hull(&input, mode).unwrap();
        assert_eq!(h.vertices, pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]));
    }
}

#[test]
fn too_few_and_empty_inputs() {
    assert_eq!(
        hull(&[(0.0, 0.0), (1.0, 1.0)], DegeneracyMode::Reduce),
        Err(HullError::TooFewPoints { needed: 3, got: 2 })
    );
    assert!(hull(&[], DegeneracyMode::Reduce)
        .unwrap_err()
        .is_invalid_input());
    assert!(hull(&[(0.0, 0.0), (1.0, f64::INFINITY), (2.0, 0.0)], DegeneracyMode::Keep)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn duplicates_are_tolerated_and_excluded() {
    let input = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (1.0, 1.0), (0.0, 1.0)];
    let expected = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    for mode in [DegeneracyMode::Keep, DegeneracyMode::Reduce] {
        assert_eq!(hull(&input, mode).unwrap().vertices, expected);
    }
    // Copies of the pivot itself collapse into the pivot.
    let input = [(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    assert_eq!(
        hull(&input, DegeneracyMode::Reduce).unwrap().vertices,
        expected
    );
}

#[test]
fn too_few_distinct_points() {
    assert_eq!(
        hull(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)], DegeneracyMode::Reduce),
        Err(HullError::TooFewPoints { needed: 3, got: 2 })
    );
    assert_eq!(
        hull(&[(0.0, 0.0), (1.0, 1.0), (1.0, 1.0)], DegeneracyMode::Keep),
        Err(HullError::TooFewPoints { needed: 3, got: 2 })
    );
}

#[test]
fn collinear_prefix_converges() {
    // The three smallest-angle points are collinear with the pivot.
    let input = [
        (3.0, 3.0),
        (2.0, 0.0),
        (0.0, 3.0),
        (3.0, 0.0),
        (0.0, 0.0),
        (1.0, 0.0),
    ];
    let ordered = sort_by_angle(&pts(&input), vector![0.0, 0.0]).unwrap();
    assert_eq!(
        orientation(ordered.points[0], ordered.points[1], ordered.points[2]),
        Turn::Collinear
    );
    let kept = build_hull(&ordered.points).unwrap();
    assert_eq!(
        kept.vertices,
        pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)])
    );
    let reduced = reduce_degeneracies(kept.vertices()).unwrap();
    assert_eq!(
        reduced.vertices,
        pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)])
    );
}

#[test]
fn collinear_prefix_then_single_apex() {
    let h = hull(
        &[(1.0, 5.0), (2.0, 0.0), (1.0, 0.0), (0.0, 0.0)],
        DegeneracyMode::Reduce,
    )
    .unwrap();
    assert_eq!(h.vertices, pts(&[(0.0, 0.0), (2.0, 0.0), (1.0, 5.0)]));
}

#[test]
fn duplicated_prefix_does_not_stick() {
    let ordered = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let h = build_hull(&ordered).unwrap();
    assert_eq!(
        h.vertices,
        pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    );
}

#[test]
fn nearer_collinear_point_is_popped() {
    // (1,1) and (2,2) share an angle; the nearer one must be scanned first.
    let h = hull(
        &[(2.0, 2.0), (0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (0.0, 2.0)],
        DegeneracyMode::Keep,
    )
    .unwrap();
    assert_eq!(
        h.vertices,
        pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    );
}

#[test]
fn fully_collinear_set_has_no_hull() {
    let input = [(2.0, 0.0), (0.0, 0.0), (1.0, 0.0)];
    for mode in [DegeneracyMode::Keep, DegeneracyMode::Reduce] {
        assert_eq!(
            hull(&input, mode),
            Err(HullError::TooFewPoints { needed: 3, got: 2 })
        );
    }
    let diagonal = [(0.0, 0.0), (3.0, 3.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0)];
    assert!(hull(&diagonal, DegeneracyMode::Keep)
        .unwrap_err()
        .is_too_few_points());
}

#[test]
fn reducer_checks_wrap_around_edge() {
    // (0,2) sits on the closing edge (0,4) → (0,0).
    let boundary = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 2.0)]);
    let reduced = reduce_degeneracies(&boundary).unwrap();
    assert_eq!(
        reduced.vertices,
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    );
    assert!(reduced.is_convex());
}

#[test]
fn reducer_drops_runs_and_closing_copy() {
    let boundary = pts(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (0.0, 3.0),
        (0.0, 0.0),
    ]);
    let reduced = reduce_degeneracies(&boundary).unwrap();
    assert_eq!(
        reduced.vertices,
        pts(&[(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)])
    );
}

#[test]
fn reducer_and_builder_need_three_points() {
    let two = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    assert_eq!(
        reduce_degeneracies(&two),
        Err(HullError::TooFewPoints { needed: 3, got: 2 })
    );
    assert_eq!(
        build_hull(&two),
        Err(HullError::TooFewPoints { needed: 3, got: 2 })
    );
    assert!(build_hull(&[]).unwrap_err().is_invalid_input());
}

#[test]
fn reduction_is_idempotent_on_example() {
    let input = [
        (0.0, 0.0),
        (2.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (4.0, 4.0),
        (2.0, 4.0),
        (0.0, 4.0),
        (1.0, 1.0),
    ];
    let once = hull(&input, DegeneracyMode::Reduce).unwrap();
    let twice = reduce_degeneracies(once.vertices()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn input_coordinates_are_not_mutated() {
    let input = pts(&[(3.0, 1.0), (0.0, 0.0), (1.0, 2.0), (2.0, 2.0)]);
    let before = input.clone();
    let _ = compute_convex_hull(&input, HullMethod::GrahamScan, DegeneracyMode::Reduce).unwrap();
    assert_eq!(input, before);
}

#[test]
fn method_names_parse_or_are_unimplemented() {
    assert_eq!("graham".parse::<HullMethod>(), Ok(HullMethod::GrahamScan));
    assert_eq!("Graham-Scan".parse::<HullMethod>(), Ok(HullMethod::GrahamScan));
    assert_eq!(
        "chan".parse::<HullMethod>(),
        Err(HullError::Unimplemented {
            method: "chan".into()
        })
    );
    assert_eq!(HullMethod::GrahamScan.to_string(), "graham-scan");
    assert_eq!(DegeneracyMode::default(), DegeneracyMode::Reduce);
}

#[test]
fn containment_and_area_helpers() {
    let h = hull(
        &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
        DegeneracyMode::Reduce,
    )
    .unwrap();
    assert!(h.contains(vector![2.0, 2.0]));
    assert!(h.contains(vector![4.0, 2.0]));
    assert!(!h.contains(vector![4.5, 2.0]));
    assert!((h.signed_area() - 16.0).abs() < 1e-12);
    assert_eq!(h.first(), Some(vector![0.0, 0.0]));
}

#[test]
fn random_floats_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Vector2<f64>> = (0..500)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let h = compute_convex_hull(&points, HullMethod::GrahamScan, DegeneracyMode::Reduce).unwrap();
    assert!(h.is_convex());
    assert_eq!(h.first(), Some(points[find_pivot(&points).unwrap()]));
    assert!(points.iter().all(|p| h.contains(*p)));
}

#[test]
fn square_with_center_at_any_scale() {
    for scale in [1e-5, 1e-3, 1e3, 1e6] {
        let input: Vec<Vector2<f64>> = pts(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.5, 0.5),
        ])
        .into_iter()
        .map(|p| p * scale)
        .collect();
        let h = compute_convex_hull(&input, HullMethod::GrahamScan, DegeneracyMode::Reduce)
            .unwrap();
        assert_eq!(h.len(), 4, "scale {scale}");
        assert_eq!(h.vertices, [input[0], input[1], input[2], input[3]]);
        assert!(h.is_convex(), "scale {scale}");
        assert!(input.iter().all(|p| h.contains(*p)), "scale {scale}");
        assert!(!h.contains(vector![2.0, 0.5] * scale));

        let kept = compute_convex_hull(&input, HullMethod::GrahamScan, DegeneracyMode::Keep)
            .unwrap();
        assert_eq!(kept.vertices, h.vertices, "scale {scale}");
    }
}

#[test]
fn large_coordinates_keep_every_point_inside() {
    let input = pts(&[
        (0.0, 0.0),
        (1e6, 0.0),
        (1e6, 1e6),
        (-5e-4, 1e6),
        (0.0, 2e6),
    ]);
    let h = compute_convex_hull(&input, HullMethod::GrahamScan, DegeneracyMode::Reduce).unwrap();
    assert!(h.is_convex());
    assert!(input.iter().all(|p| h.contains(*p)));

    // A dent well above tolerance is a real vertex.
    let input = pts(&[
        (0.0, 0.0),
        (1e6, 0.0),
        (1e6, 1e6),
        (-5.0, 1e6),
        (0.0, 2e6),
    ]);
    let h = compute_convex_hull(&input, HullMethod::GrahamScan, DegeneracyMode::Reduce).unwrap();
    assert_eq!(
        h.vertices,
        pts(&[(0.0, 0.0), (1e6, 0.0), (1e6, 1e6), (0.0, 2e6), (-5.0, 1e6)])
    );
    assert!(h.is_convex());
    assert!(input.iter().all(|p| h.contains(*p)));
}

fn grid_points() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-10i8..=10, -10i8..=10), 3..60).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| Vector2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    #[test]
    fn reduced_hull_properties(points in grid_points()) {
        let h = match compute_convex_hull(&points, HullMethod::GrahamScan, DegeneracyMode::Reduce) {
            Ok(h) => h,
            // Only collinear or near-duplicate sets have no hull.
            Err(e) => {
                prop_assert!(e.is_too_few_points());
                return Ok(());
            }
        };
        let pivot = points[find_pivot(&points).unwrap()];
        prop_assert_eq!(h.first(), Some(pivot));
        prop_assert!(h.iter().all(|v| points.contains(v)));
        prop_assert!(h.len() >= 3);
        prop_assert!(h.is_convex());
        prop_assert!(h.signed_area() > 0.0);
        prop_assert!(points.iter().all(|p| h.contains(*p)));
        let again = reduce_degeneracies(h.vertices()).unwrap();
        prop_assert_eq!(again, h);
    }

    #[test]
    fn kept_hull_has_no_right_turns(points in grid_points()) {
        let res = compute_convex_hull(&points, HullMethod::GrahamScan, DegeneracyMode::Keep);
        prop_assume!(res.is_ok());
        let h = res.unwrap();
        prop_assert_eq!(h.first(), Some(points[find_pivot(&points).unwrap()]));
        prop_assert!(h.triples().all(|[a, b, c]| orientation(a, b, c) != Turn::Right));
        prop_assert!(h.signed_area() > 0.0);
        prop_assert!(points.iter().all(|p| h.contains(*p)));
    }

    #[test]
    fn hull_commutes_with_scaling(
        points in grid_points(),
        scale in prop_oneof![Just(1e-6), Just(1e-3), Just(0.5), Just(1e3), Just(1e6)],
    ) {
        let scaled: Vec<Vector2<f64>> = points.iter().map(|p| p * scale).collect();
        let base = compute_convex_hull(&points, HullMethod::GrahamScan, DegeneracyMode::Reduce);
        let big = compute_convex_hull(&scaled, HullMethod::GrahamScan, DegeneracyMode::Reduce);
        match (base, big) {
            (Ok(h), Ok(g)) => {
                let expected: Vec<Vector2<f64>> = h.iter().map(|p| p * scale).collect();
                prop_assert_eq!(g.vertices, expected);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "unscaled {:?} vs scaled {:?}", a, b),
        }
    }
}
