//! K-d tree over floating point co-ordinates, for exact-match membership queries.
//!
//! Each node holds one point. A node at depth `d` splits on axis `d % K`: every
//! point in its left subtree is strictly less than the node on that axis, every
//! point in its right subtree is greater or equal.

use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{KdTreeError, Result};
use crate::iter::TreeIter;
use crate::point::Point;
use crate::types::Axis;
#[cfg(feature = "serde")]
use serde::ser::SerializeStruct;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "tracing")]
use tracing::{event, Level};

/// Floating point k-d tree
///
/// Stores every inserted point in its own node. Duplicate points are kept as
/// separate nodes; nothing is ever merged, rebalanced or removed.
///
/// Dropping, cloning, comparing and (de)serializing trees do not recurse, so
/// degenerate trees (e.g. built from sorted input) of any depth are safe to handle.
///
/// With the `serde` feature a tree is written as its dimension plus a flat,
/// pre-order list of points, and read back by re-inserting them.
pub struct KdTree<A> {
    pub(crate) root: Option<Box<Node<A>>>,
    pub(crate) dimension: NonZeroUsize,
    pub(crate) size: usize,
}

pub(crate) struct Node<A> {
    pub(crate) point: Point<A>,
    pub(crate) left: Option<Box<Node<A>>>,
    pub(crate) right: Option<Box<Node<A>>>,
}

impl<A> Node<A> {
    pub(crate) fn new(point: Point<A>) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }
}

impl<A: Axis> KdTree<A> {
    /// Creates a new, empty KdTree for points with `dimension` co-ordinates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTree, KdTreeError};
    ///
    /// let tree: KdTree<f64> = KdTree::new(3)?;
    /// assert_eq!(tree.size(), 0);
    ///
    /// assert_eq!(
    ///     KdTree::<f64>::new(0).unwrap_err(),
    ///     KdTreeError::InvalidDimension(0)
    /// );
    /// # Ok::<(), KdTreeError>(())
    /// ```
    pub fn new(dimension: usize) -> Result<Self> {
        let dimension =
            NonZeroUsize::new(dimension).ok_or(KdTreeError::InvalidDimension(dimension))?;

        Ok(Self {
            root: None,
            dimension,
            size: 0,
        })
    }

    /// Creates a KdTree and inserts `points` into it, in order.
    ///
    /// Fails without building anything if any point has the wrong dimension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::KdTree;
    ///
    /// let tree: KdTree<f64> = KdTree::from_points(2, [[3.0, 6.0], [17.0, 15.0], [13.0, 15.0]])?;
    ///
    /// assert_eq!(tree.size(), 3);
    /// # Ok::<(), arboretum::KdTreeError>(())
    /// ```
    pub fn from_points<I, P>(dimension: usize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<A>>,
    {
        let mut tree = Self::new(dimension)?;
        tree.insert_all(points)?;
        Ok(tree)
    }

    /// Returns the number of co-ordinates every point in this tree has
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension.get()
    }

    /// Returns the current number of points stored in the tree, duplicates included
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::KdTree;
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(3)?;
    ///
    /// tree.insert([1.0, 2.0, 5.0])?;
    /// tree.insert([1.0, 2.0, 5.0])?;
    ///
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), arboretum::KdTreeError>(())
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if no point has been inserted yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels in the tree, `0` when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<A>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left.as_deref().map(|child| (child, level + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, level + 1)));
        }

        height
    }

    /// Iterate over all stored points in depth-first pre-order.
    ///
    /// Re-inserting the points in this order into an empty tree reproduces the
    /// same tree shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTree, Point};
    ///
    /// let tree: KdTree<f64> = KdTree::from_points(2, [[3.0, 6.0], [17.0, 15.0], [2.0, 7.0]])?;
    ///
    /// let points: Vec<&Point<f64>> = tree.iter().collect();
    /// assert_eq!(points[0], &Point::new([3.0, 6.0]));
    /// assert_eq!(points.len(), 3);
    /// # Ok::<(), arboretum::KdTreeError>(())
    /// ```
    pub fn iter(&self) -> TreeIter<'_, A> {
        TreeIter::new(self.root.as_deref())
    }

    /// Checks the k-d ordering property at every node against every ancestor's split.
    ///
    /// Trees built through [`insert`](KdTree::insert) always pass. Points of the
    /// wrong dimension also fail the check.
    pub fn is_valid(&self) -> bool {
        self.first_invalid_depth().is_none()
    }

    /// Depth of the first node (in pre-order) that sits on the wrong side of
    /// one of its ancestors' splits.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub(crate) fn first_invalid_depth(&self) -> Option<usize> {
        let k = self.dimension();
        let root = self.root.as_deref()?;

        // per-axis bounds inherited from ancestors: lower is inclusive, upper exclusive
        let mut stack: Vec<(&Node<A>, usize, Vec<Option<A>>, Vec<Option<A>>)> =
            vec![(root, 0, vec![None; k], vec![None; k])];

        while let Some((node, depth, lower, upper)) = stack.pop() {
            let coords = node.point.coordinates();
            if coords.len() != k {
                return Some(depth);
            }

            let out_of_bounds = coords
                .iter()
                .zip(lower.iter().zip(upper.iter()))
                .any(|(&val, (lo, hi))| {
                    lo.is_some_and(|lo| val < lo) || hi.is_some_and(|hi| !(val < hi))
                });
            if out_of_bounds {
                return Some(depth);
            }

            let split_dim = depth % k;
            let split_val = coords[split_dim];

            if let Some(right) = node.right.as_deref() {
                let mut right_lower = lower.clone();
                right_lower[split_dim] = Some(match lower[split_dim] {
                    Some(lo) => lo.max(split_val),
                    None => split_val,
                });
                stack.push((right, depth + 1, right_lower, upper.clone()));
            }
            if let Some(left) = node.left.as_deref() {
                let mut left_upper = upper;
                left_upper[split_dim] = Some(match left_upper[split_dim] {
                    Some(hi) => hi.min(split_val),
                    None => split_val,
                });
                stack.push((left, depth + 1, lower, left_upper));
            }
        }

        None
    }

    /// Fails with [`KdTreeError::DimensionMismatch`] unless `coordinates` has
    /// exactly as many entries as the tree's dimension.
    pub(crate) fn check_dimension(&self, coordinates: &[A]) -> Result<()> {
        if coordinates.len() != self.dimension() {
            #[cfg(feature = "tracing")]
            event!(
                Level::DEBUG,
                expected = self.dimension(),
                actual = coordinates.len(),
                "rejected point with mismatched dimension"
            );

            return Err(KdTreeError::DimensionMismatch {
                expected: self.dimension(),
                actual: coordinates.len(),
            });
        }
        Ok(())
    }
}

impl<A> Drop for KdTree<A> {
    fn drop(&mut self) {
        // unlink nodes one at a time so a long chain doesn't drop recursively
        let mut stack: Vec<Box<Node<A>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<A: Axis> Clone for KdTree<A> {
    fn clone(&self) -> Self {
        let mut tree = Self {
            root: None,
            dimension: self.dimension,
            size: 0,
        };
        // pre-order re-insertion rebuilds the identical shape
        for point in self.iter() {
            tree.attach(point.clone());
        }
        tree
    }
}

impl<A: Axis> PartialEq for KdTree<A> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<A: Axis> fmt::Debug for KdTree<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("dimension", &self.dimension)
            .field("size", &self.size)
            .field("points", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, A: Axis> IntoIterator for &'a KdTree<A> {
    type Item = &'a Point<A>;
    type IntoIter = TreeIter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
struct PreOrder<'a, A>(&'a KdTree<A>);

#[cfg(feature = "serde")]
impl<A: Axis + Serialize> Serialize for PreOrder<'_, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<A: Axis + Serialize> Serialize for KdTree<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KdTree", 2)?;
        state.serialize_field("dimension", &self.dimension())?;
        state.serialize_field("points", &PreOrder(self))?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(bound(deserialize = "A: Axis + Deserialize<'de>"))]
struct SerializedKdTree<A> {
    dimension: usize,
    points: Vec<Point<A>>,
}

#[cfg(feature = "serde")]
impl<'de, A: Axis + Deserialize<'de>> Deserialize<'de> for KdTree<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let serialized = SerializedKdTree::<A>::deserialize(deserializer)?;

        // pre-order re-insertion rebuilds the shape that was written
        KdTree::from_points(serialized.dimension, serialized.points)
            .map_err(serde::de::Error::custom)
    }
}
