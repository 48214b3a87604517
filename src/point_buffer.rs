use crate::error::BufferError;
use crate::Point;
use std::slice;

const DEFAULT_CAPACITY: usize = 16;

/// Growable, insertion ordered sequence of points. Sink of range queries.
///
/// The capacity doubles exactly when a push finds the buffer full, so pushing `n` points into a
/// buffer created with capacity `c` grows it `ceil(log2(n / c))` times.
#[derive(Debug, Clone)]
pub struct PointBuffer<T = i32> {
    points: Vec<Point<T>>,
    capacity: usize,
    growths: usize,
}

impl<T> Default for PointBuffer<T> {
    fn default() -> Self {
        Self {
            points: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            growths: 0,
        }
    }
}

impl<T> PointBuffer<T> {
    /// A zero capacity could never grow by doubling and is rejected.
    pub fn new(initial_capacity: usize) -> Result<Self, BufferError> {
        if initial_capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        Ok(Self {
            points: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            growths: 0,
        })
    }

    pub fn push(&mut self, point: Point<T>) {
        if self.points.len() == self.capacity {
            self.grow();
        }
        self.points.push(point);
    }

    fn grow(&mut self) {
        debug_assert!(self.capacity > 0);
        self.capacity = self.capacity.saturating_mul(2);
        self.points.reserve_exact(self.capacity - self.points.len());
        self.growths += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points the buffer holds before it has to grow again.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the capacity was doubled.
    pub fn growths(&self) -> usize {
        self.growths
    }

    pub fn as_slice(&self) -> &[Point<T>] {
        self.points.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, Point<T>> {
        self.points.iter()
    }
}

impl<'a, T> IntoIterator for &'a PointBuffer<T> {
    type Item = &'a Point<T>;
    type IntoIter = slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<Point<T>> for PointBuffer<T> {
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point<T>>,
    {
        for p in it {
            self.push(p);
        }
    }
}
