//! Error types.

use thiserror::Error;

/// Reasons a point was dropped by [`Quadtree::try_insert`](crate::Quadtree::try_insert).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum InsertError {
    #[error("Point lies outside the index boundary")]
    OutOfBounds,

    /// The full leaf holding the point is already at the minimum extent.
    #[error("Node at depth {depth} is too small to subdivide")]
    SubdivisionRefused { depth: usize },

    /// Truncated quadrants of an odd integer extent left the point in a gap.
    #[error("No quadrant of the node at depth {depth} covers the point")]
    Uncovered { depth: usize },
}

/// Errors that can occur when creating a [`PointBuffer`](crate::PointBuffer).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum BufferError {
    #[error("Point buffer capacity must be greater than zero")]
    ZeroCapacity,
}

/// Errors reported by [`QuadtreeConfig::validate`](crate::QuadtreeConfig::validate).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("Node capacity {capacity} is outside of 1..={max}")]
    CapacityOutOfRange { capacity: usize, max: usize },

    #[error("Minimum extent must be greater than zero")]
    NonPositiveMinExtent,
}
