//! Traits shared by the [`Point`](crate::Point) and [`KdTree`](crate::KdTree) types.
use num_traits::float::FloatCore;
use std::fmt::Debug;

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the co-ordinate type, `A`,
/// on [`Point`](crate::Point) and [`KdTree`](crate::KdTree). This will be [`f64`] or [`f32`].
///
/// Co-ordinates are compared with plain `<` and `==`, so a `NaN` co-ordinate
/// never matches anything and always routes to the right-hand subtree.
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}
