use arboretum::test_utils::{rand_point, rand_tree};
use arboretum::{KdTree, KdTreeError, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_kdtree_finds_the_doc_points() {
    let mut tree: KdTree<f64> = KdTree::new(2).unwrap();

    for point in [
        [3.0, 6.0],
        [17.0, 15.0],
        [13.0, 15.0],
        [6.0, 12.0],
        [9.0, 1.0],
        [2.0, 7.0],
        [10.0, 19.0],
    ] {
        tree.insert(point).unwrap();
    }

    assert_eq!(tree.size(), 7);
    assert!(tree.contains([10.0, 19.0]).unwrap());
    assert!(!tree.contains([12.0, 19.0]).unwrap());
}

#[test]
fn test_kdtree_round_trip_with_random_points() {
    let mut rng = StdRng::seed_from_u64(2024);
    let (mut tree, points) = rand_tree::<f64, _>(&mut rng, 4, 2_000);

    assert!(tree.is_valid());
    for point in &points {
        assert!(tree.contains(point).unwrap());
    }

    // still found after many unrelated insertions
    for _ in 0..2_000 {
        tree.insert(rand_point::<f64, _>(&mut rng, 4)).unwrap();
    }
    assert_eq!(tree.size(), 4_000);
    assert!(tree.is_valid());
    for point in &points {
        assert!(tree.contains(point).unwrap());
    }
}

#[test]
fn test_kdtree_negative_lookup() {
    let mut rng = StdRng::seed_from_u64(99);
    let (tree, points) = rand_tree::<f32, _>(&mut rng, 3, 1_000);

    for _ in 0..1_000 {
        let query: Point<f32> = rand_point(&mut rng, 3);
        let expected = points.contains(&query);

        assert_eq!(tree.contains(&query).unwrap(), expected);
    }

    // outside the unit cube the generators sample from
    assert!(!tree.contains([1.5, 0.5, 0.5]).unwrap());
    assert!(!tree.contains([-0.5, 0.5, 0.5]).unwrap());
}

#[test]
fn test_kdtree_empty_tree() {
    let tree: KdTree<f64> = KdTree::new(5).unwrap();

    assert!(tree.is_empty());
    assert!(!tree.contains([0.0; 5]).unwrap());
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn test_kdtree_rejects_mismatched_dimensions_without_changing() {
    let mut rng = StdRng::seed_from_u64(5);
    let (mut tree, _) = rand_tree::<f64, _>(&mut rng, 3, 50);
    let before = tree.clone();

    assert_eq!(
        tree.insert([1.0, 2.0]),
        Err(KdTreeError::DimensionMismatch {
            expected: 3,
            actual: 2
        })
    );
    assert_eq!(
        tree.insert([1.0, 2.0, 3.0, 4.0]),
        Err(KdTreeError::DimensionMismatch {
            expected: 3,
            actual: 4
        })
    );
    assert_eq!(
        tree.contains([1.0]),
        Err(KdTreeError::DimensionMismatch {
            expected: 3,
            actual: 1
        })
    );

    assert_eq!(tree, before);
    assert_eq!(tree.size(), 50);
}

#[test]
fn test_kdtree_zero_dimension() {
    assert_eq!(
        KdTree::<f64>::new(0).unwrap_err(),
        KdTreeError::InvalidDimension(0)
    );
}

#[test]
fn test_kdtree_duplicate_insertion() {
    let mut tree: KdTree<f64> = KdTree::from_points(2, [[3.0, 6.0], [17.0, 15.0]]).unwrap();

    tree.insert([17.0, 15.0]).unwrap();
    assert_eq!(tree.size(), 3);
    assert!(tree.contains([17.0, 15.0]).unwrap());

    tree.insert([17.0, 15.0]).unwrap();
    assert_eq!(tree.size(), 4);
    assert!(tree.contains([17.0, 15.0]).unwrap());
    assert_eq!(
        tree.iter().filter(|p| p.coordinates() == [17.0, 15.0]).count(),
        3
    );
    assert!(tree.is_valid());
}

#[test]
fn test_kdtree_sorted_input_builds_a_chain() {
    let points: Vec<[f64; 2]> = (0..1_000).map(|i| [i as f64, i as f64]).collect();

    let tree = KdTree::<f64>::from_points(2, points.iter().copied()).unwrap();

    assert_eq!(tree.height(), 1_000);
    assert!(tree.contains([999.0, 999.0]).unwrap());
    assert!(!tree.contains([999.0, 998.0]).unwrap());
}
