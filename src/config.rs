//! Index configuration.

use crate::error::ConfigError;
use crate::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points stored per node unless configured otherwise.
pub const DEFAULT_NODE_CAPACITY: usize = 5;

/// Size of the inline point storage of every node. Configured capacities may not exceed it.
pub const MAX_NODE_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadtreeConfig<T> {
    /// Points a leaf holds before it subdivides.
    #[cfg_attr(feature = "serde", serde(default = "default_capacity"))]
    pub capacity: usize,
    /// Smallest width or height a child node may have.
    pub min_extent: T,
}

#[cfg(feature = "serde")]
fn default_capacity() -> usize {
    DEFAULT_NODE_CAPACITY
}

impl<T: Scalar> Default for QuadtreeConfig<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_NODE_CAPACITY,
            min_extent: T::ONE,
        }
    }
}

impl<T: Scalar> QuadtreeConfig<T> {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_min_extent(mut self, min_extent: T) -> Self {
        self.min_extent = min_extent;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 || self.capacity > MAX_NODE_CAPACITY {
            return Err(ConfigError::CapacityOutOfRange {
                capacity: self.capacity,
                max: MAX_NODE_CAPACITY,
            });
        }
        // written so that NaN is rejected as well
        if !(self.min_extent > T::ZERO) {
            return Err(ConfigError::NonPositiveMinExtent);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = QuadtreeConfig::<i32>::default();
        assert_eq!(config.capacity, 5);
        assert_eq!(config.min_extent, 1);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn capacity_bounds() {
        let config = QuadtreeConfig::<i32>::default();

        assert_eq!(
            config.with_capacity(0).validate(),
            Err(ConfigError::CapacityOutOfRange {
                capacity: 0,
                max: MAX_NODE_CAPACITY
            })
        );
        assert!(config.with_capacity(MAX_NODE_CAPACITY).validate().is_ok());
        assert!(config
            .with_capacity(MAX_NODE_CAPACITY + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn min_extent_must_be_positive() {
        let config = QuadtreeConfig::<f64>::default();

        assert_eq!(
            config.with_min_extent(0.0).validate(),
            Err(ConfigError::NonPositiveMinExtent)
        );
        assert_eq!(
            config.with_min_extent(f64::NAN).validate(),
            Err(ConfigError::NonPositiveMinExtent)
        );
        assert!(config.with_min_extent(0.25).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_from_toml() {
        let config: QuadtreeConfig<i32> = toml::from_str("min_extent = 4").unwrap();
        assert_eq!(config.capacity, DEFAULT_NODE_CAPACITY);
        assert_eq!(config.min_extent, 4);

        let config: QuadtreeConfig<f64> =
            toml::from_str("capacity = 8\nmin_extent = 0.5").unwrap();
        assert_eq!(config, QuadtreeConfig::default().with_capacity(8).with_min_extent(0.5));

        let text = toml::to_string(&config).unwrap();
        let back: QuadtreeConfig<f64> = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
