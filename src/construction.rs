use crate::error::Result;
use crate::kdtree::{KdTree, Node};
use crate::point::Point;
use crate::types::Axis;
#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl<A: Axis> KdTree<A> {
    /// Adds a point to the tree.
    ///
    /// Descends from the root, going left when the point is strictly less than the
    /// current node on that level's split axis and right otherwise, and attaches a
    /// new node at the first empty slot. Existing nodes are never moved.
    ///
    /// Inserting a point that is already present adds a second node for it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTree, KdTreeError};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(3)?;
    ///
    /// tree.insert([1.0, 2.0, 5.0])?;
    ///
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(
    ///     tree.insert([1.0, 2.0]),
    ///     Err(KdTreeError::DimensionMismatch { expected: 3, actual: 2 })
    /// );
    /// # Ok::<(), KdTreeError>(())
    /// ```
    pub fn insert<P: Into<Point<A>>>(&mut self, point: P) -> Result<()> {
        let point = point.into();
        self.check_dimension(point.coordinates())?;
        self.attach(point);
        Ok(())
    }

    /// Adds every point in `points`, in order.
    ///
    /// All points are checked before any is added, so on error the tree is left
    /// exactly as it was.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64> = KdTree::new(2)?;
    ///
    /// tree.insert_all([[3.0, 6.0], [17.0, 15.0]])?;
    /// assert_eq!(tree.size(), 2);
    ///
    /// let batch: Vec<Point<f64>> = vec![[1.0, 1.0].into(), [1.0].into()];
    /// assert!(tree.insert_all(batch).is_err());
    /// assert_eq!(tree.size(), 2);
    /// # Ok::<(), arboretum::KdTreeError>(())
    /// ```
    pub fn insert_all<I, P>(&mut self, points: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point<A>>,
    {
        let points: Vec<Point<A>> = points.into_iter().map(Into::into).collect();

        for point in &points {
            self.check_dimension(point.coordinates())?;
        }

        for point in points {
            self.attach(point);
        }

        Ok(())
    }

    /// Attaches `point` at the empty slot its descent ends in. Dimension must
    /// already have been checked.
    pub(crate) fn attach(&mut self, point: Point<A>) {
        let k = self.dimension();
        let mut slot = &mut self.root;
        let mut depth = 0;

        while let Some(node) = slot {
            let split_dim = depth % k;

            slot = if point.coordinates()[split_dim] < node.point.coordinates()[split_dim] {
                &mut node.left
            } else {
                &mut node.right
            };

            depth += 1;
        }

        *slot = Some(Box::new(Node::new(point)));
        self.size += 1;

        #[cfg(feature = "tracing")]
        event!(
            Level::TRACE,
            depth,
            split_dim = depth % k,
            size = self.size,
            "attached point"
        );
    }
}
