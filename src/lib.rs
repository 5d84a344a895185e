#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # Arboretum
//!
//! A k-d tree for exact-match membership queries.
//!
//! Points are fixed-dimension sequences of float co-ordinates. Each level of the
//! tree splits on a different axis (`depth % K`), so a lookup only ever descends
//! into one child per level instead of scanning every stored point.
//!
//! The dimension `K` is chosen when the tree is created and checked on every
//! operation that takes a point.
//!
//! ## Installation
//!
//! Add `arboretum` to `Cargo.toml`
//! ```toml
//! [dependencies]
//! arboretum = "0.1"
//! ```
//!
//! ## Usage
//! ```rust
//! use arboretum::KdTree;
//!
//! let mut tree: KdTree<f64> = KdTree::new(2)?;
//!
//! tree.insert([3.0, 6.0])?;
//! tree.insert([17.0, 15.0])?;
//! tree.insert([13.0, 15.0])?;
//!
//! assert_eq!(tree.size(), 3);
//! assert!(tree.contains([13.0, 15.0])?);
//! assert!(!tree.contains([13.0, 16.0])?);
//!
//! // points of the wrong dimension are rejected before the tree is touched
//! assert!(tree.insert([1.0, 2.0, 3.0]).is_err());
//! assert_eq!(tree.size(), 3);
//! # Ok::<(), arboretum::KdTreeError>(())
//! ```
//!
//! ## Optional features
//!
//! * `tracing` (default): emits `tracing` events on insertion, lookup and rejected input.
//! * `serde`: `Serialize` / `Deserialize` for [`Point`] and [`KdTree`].

mod construction;
pub mod error;
pub mod iter;
pub mod kdtree;
pub mod point;
mod query;
#[cfg(feature = "test_utils")]
#[doc(hidden)]
pub mod test_utils;
pub mod types;

pub use crate::error::{KdTreeError, Result};
pub use crate::kdtree::KdTree;
pub use crate::point::Point;
pub use crate::types::Axis;
