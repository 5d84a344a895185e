use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::kdtree::KdTree;
use crate::point::Point;
use crate::types::Axis;

pub fn rand_point<A: Axis, R: Rng>(rng: &mut R, dimension: usize) -> Point<A>
where
    StandardUniform: Distribution<A>,
{
    Point::new((0..dimension).map(|_| rng.random::<A>()).collect::<Vec<_>>())
}

pub fn rand_points<A: Axis, R: Rng>(rng: &mut R, dimension: usize, qty: usize) -> Vec<Point<A>>
where
    StandardUniform: Distribution<A>,
{
    (0..qty).map(|_| rand_point(rng, dimension)).collect()
}

/// Builds a tree of `qty` random points, returning the points alongside it in insertion order.
pub fn rand_tree<A: Axis, R: Rng>(
    rng: &mut R,
    dimension: usize,
    qty: usize,
) -> (KdTree<A>, Vec<Point<A>>)
where
    StandardUniform: Distribution<A>,
{
    let points = rand_points(rng, dimension, qty);
    let tree = KdTree::from_points(dimension, points.iter().cloned())
        .expect("generated points always match the tree dimension");

    (tree, points)
}
