use crate::error::Result;
use crate::kdtree::KdTree;
use crate::types::Axis;
#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis> KdTree<A> {
    /// Returns `true` if a point equal to `query` (every co-ordinate `==`) is stored in the tree.
    ///
    /// Follows the same left / right rule as [`insert`](KdTree::insert), so only one
    /// node per level is visited. Each visited node is compared on every
    /// co-ordinate, not just its split axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTree, KdTreeError, Point};
    ///
    /// let tree: KdTree<f64> = KdTree::from_points(
    ///     2,
    ///     [
    ///         [3.0, 6.0],
    ///         [17.0, 15.0],
    ///         [13.0, 15.0],
    ///         [6.0, 12.0],
    ///         [9.0, 1.0],
    ///         [2.0, 7.0],
    ///         [10.0, 19.0],
    ///     ],
    /// )?;
    ///
    /// assert!(tree.contains([10.0, 19.0])?);
    /// assert!(!tree.contains([12.0, 19.0])?);
    /// assert!(tree.contains(&Point::new([9.0, 1.0]))?);
    ///
    /// assert_eq!(
    ///     tree.contains([10.0]),
    ///     Err(KdTreeError::DimensionMismatch { expected: 2, actual: 1 })
    /// );
    /// # Ok::<(), KdTreeError>(())
    /// ```
    pub fn contains<Q: AsRef<[A]>>(&self, query: Q) -> Result<bool> {
        let query = query.as_ref();
        self.check_dimension(query)?;

        let k = self.dimension();
        let mut curr = self.root.as_deref();
        let mut depth = 0;

        while let Some(node) = curr {
            let point = node.point.coordinates();
            if point == query {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, depth, found = true, "lookup finished");

                return Ok(true);
            }

            let split_dim = depth % k;
            curr = if query[split_dim] < point[split_dim] {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };

            depth += 1;
        }

        #[cfg(feature = "tracing")]
        event!(Level::TRACE, depth, found = false, "lookup finished");

        Ok(false)
    }
}
