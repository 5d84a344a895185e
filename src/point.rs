//! Fixed-length, immutable points stored in a [`KdTree`](crate::KdTree).

use std::fmt;

use crate::error::{KdTreeError, Result};
use crate::types::Axis;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable sequence of co-ordinates.
///
/// Two points are equal iff they have the same length and every co-ordinate
/// compares equal with `==`. There is no tolerance: `0.1 + 0.2` is not `0.3`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(serialize = "A: Serialize", deserialize = "A: Deserialize<'de>"))
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Point<A> {
    coordinates: Box<[A]>,
}

impl<A: Axis> Point<A> {
    /// Creates a point from any sequence of co-ordinates.
    ///
    /// The length is not checked here; it is checked against the tree's
    /// dimension when the point is inserted or queried.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::Point;
    ///
    /// let point = Point::new(vec![1.0, 2.0, 5.0]);
    ///
    /// assert_eq!(point.dimension(), 3);
    /// ```
    pub fn new<C: Into<Box<[A]>>>(coordinates: C) -> Self {
        Self {
            coordinates: coordinates.into(),
        }
    }

    /// Creates a point, failing unless exactly `dimension` co-ordinates are supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTreeError, Point};
    ///
    /// let point = Point::with_dimension(vec![1.0, 2.0], 2)?;
    /// assert_eq!(point.coordinates(), &[1.0, 2.0]);
    ///
    /// assert_eq!(
    ///     Point::with_dimension(vec![1.0, 2.0], 3),
    ///     Err(KdTreeError::DimensionMismatch { expected: 3, actual: 2 })
    /// );
    /// # Ok::<(), KdTreeError>(())
    /// ```
    pub fn with_dimension<C: Into<Box<[A]>>>(coordinates: C, dimension: usize) -> Result<Self> {
        let point = Self::new(coordinates);
        if point.dimension() != dimension {
            return Err(KdTreeError::DimensionMismatch {
                expected: dimension,
                actual: point.dimension(),
            });
        }
        Ok(point)
    }

    /// Returns the number of co-ordinates in this point
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns the co-ordinate on `axis`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arboretum::{KdTreeError, Point};
    ///
    /// let point = Point::new([3.0, 6.0]);
    ///
    /// assert_eq!(point.coordinate(1), Ok(6.0));
    /// assert_eq!(
    ///     point.coordinate(2),
    ///     Err(KdTreeError::IndexOutOfRange { axis: 2, dimension: 2 })
    /// );
    /// ```
    #[inline]
    pub fn coordinate(&self, axis: usize) -> Result<A> {
        self.coordinates
            .get(axis)
            .copied()
            .ok_or(KdTreeError::IndexOutOfRange {
                axis,
                dimension: self.dimension(),
            })
    }

    /// Returns all co-ordinates as a slice
    #[inline]
    pub fn coordinates(&self) -> &[A] {
        &self.coordinates
    }
}

impl<A> AsRef<[A]> for Point<A> {
    fn as_ref(&self) -> &[A] {
        &self.coordinates
    }
}

impl<A: Axis, const N: usize> From<[A; N]> for Point<A> {
    fn from(coordinates: [A; N]) -> Self {
        Point::new(coordinates)
    }
}

impl<A: Axis> From<Vec<A>> for Point<A> {
    fn from(coordinates: Vec<A>) -> Self {
        Point::new(coordinates)
    }
}

impl<A: Axis> From<&[A]> for Point<A> {
    fn from(coordinates: &[A]) -> Self {
        Point::new(coordinates)
    }
}

impl<A: Axis + fmt::Display> fmt::Display for Point<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, val) in self.coordinates.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{val}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::error::KdTreeError;
    use crate::point::Point;

    #[test]
    fn it_can_be_constructed_from_an_array_a_vec_or_a_slice() {
        let from_array: Point<f64> = [1.0, 2.0, 3.0].into();
        let from_vec: Point<f64> = vec![1.0, 2.0, 3.0].into();
        let from_slice: Point<f64> = (&[1.0, 2.0, 3.0][..]).into();

        assert_eq!(from_array, from_vec);
        assert_eq!(from_vec, from_slice);
        assert_eq!(from_array.dimension(), 3);
    }

    #[test]
    fn with_dimension_rejects_the_wrong_count() {
        let err = Point::<f32>::with_dimension(vec![1.0], 2).unwrap_err();

        assert_eq!(
            err,
            KdTreeError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn coordinate_access_is_bounds_checked() {
        let point = Point::new([9.0f64, 1.0, -4.5]);

        assert_eq!(point.coordinate(0), Ok(9.0));
        assert_eq!(point.coordinate(2), Ok(-4.5));
        assert_eq!(
            point.coordinate(3),
            Err(KdTreeError::IndexOutOfRange {
                axis: 3,
                dimension: 3
            })
        );
    }

    #[test]
    fn equality_is_exact() {
        let a = Point::new([0.1f64 + 0.2, 1.0]);
        let b = Point::new([0.3f64, 1.0]);

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn equality_needs_matching_dimensions() {
        assert_ne!(Point::new([1.0f64, 2.0]), Point::new([1.0f64, 2.0, 0.0]));
    }

    #[test]
    fn nan_never_equals_itself() {
        let point = Point::new([f64::NAN, 1.0]);

        assert_ne!(point, point.clone());
    }

    #[test]
    fn it_displays_as_a_tuple() {
        assert_eq!(Point::new([3.0f64, 6.0]).to_string(), "(3, 6)");
        assert_eq!(Point::new([1.5f32]).to_string(), "(1.5)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn can_serde() {
        let point = Point::new([1.0f64, -2.5, 3.25]);

        let serialized = serde_json::to_string(&point).unwrap();
        let deserialized: Point<f64> = serde_json::from_str(&serialized).unwrap();

        assert_eq!(point, deserialized);
    }
}
