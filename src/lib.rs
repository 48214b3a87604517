//! Region Quadtree.
//!
//! A bounded-capacity point index over a fixed rectangular area. Points are inserted one at a
//! time and retrieved with axis-aligned range queries.
//!
//! # Contracts:
//! - Rectangles are given by their center and their *full* width and height.
//! - Containment is half-open: `[center - w/2, center + w/2)` on both axes.
//! - Integer coordinates halve by truncation, so odd extents lose a unit per level.
//!
//! ```
//! use region_quadtree::{Point, Quadtree, Rect};
//!
//! let mut tree = Quadtree::new(Rect::new(400, 400, 800, 800));
//! assert!(tree.insert(Point::new(10, 10)));
//! assert!(!tree.insert(Point::new(800, 10)));
//!
//! let found = tree.query_range(Rect::new(20, 20, 40, 40));
//! assert_eq!(found.as_slice(), &[Point::new(10, 10)]);
//! ```
pub mod config;
pub mod error;
pub mod point_buffer;
pub mod quadtree;
pub mod rect;

pub use config::{QuadtreeConfig, DEFAULT_NODE_CAPACITY, MAX_NODE_CAPACITY};
pub use error::{BufferError, ConfigError, InsertError};
pub use point_buffer::PointBuffer;
pub use quadtree::{NodeView, Quadtree, Traverse};
pub use rect::Rect;

use std::fmt::Debug;
use std::ops::{Add, Deref, Div, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric type of a coordinate. Every point and rectangle of one index shares it.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Integers truncate toward zero.
    #[inline]
    fn half(self) -> Self {
        self / Self::TWO
    }

    /// Integers clamp at their numeric bounds instead of overflowing.
    fn saturating_add(self, rhs: Self) -> Self;

    /// Integers clamp at their numeric bounds instead of overflowing.
    fn saturating_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($ty: ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const TWO: Self = 2;

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$ty>::saturating_add(self, rhs)
                }

                #[inline]
                fn saturating_sub(self, rhs: Self) -> Self {
                    <$ty>::saturating_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($ty: ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const TWO: Self = 2.0;

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn saturating_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
            }
        )*
    };
}

impl_scalar_int!(i16, i32, i64);
impl_scalar_float!(f32, f64);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T = i32>(pub [T; 2]);

impl<T> Deref for Point<T> {
    type Target = [T; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}
