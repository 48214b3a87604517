mod traverse;

pub use traverse::{NodeView, Traverse};

use crate::config::{QuadtreeConfig, MAX_NODE_CAPACITY};
use crate::error::{ConfigError, InsertError};
use crate::point_buffer::PointBuffer;
use crate::{Point, Rect, Scalar};
use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

// north-west, north-east, south-west, south-east
type Children<T> = Option<Box<[Node<T>; 4]>>;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    boundary: Rect<T>,
    children: Children<T>,
    // only ever appended to while the node is a leaf
    points: ArrayVec<[Point<T>; MAX_NODE_CAPACITY]>,
}

/// Region quadtree over a fixed boundary.
///
/// Leaves hold up to `config.capacity` points. The leaf that receives one point too many is split
/// into four quadrants and every later point is handed down to them. Nodes never shrink or merge;
/// rebuild the tree (see [`Quadtree::clear`]) when the point set changes.
#[derive(Debug, Clone)]
pub struct Quadtree<T = i32> {
    root: Node<T>,
    config: QuadtreeConfig<T>,
    len: usize,
}

impl<T: Scalar> Quadtree<T> {
    pub fn new(boundary: Rect<T>) -> Self {
        Self {
            root: Node::new(boundary),
            config: QuadtreeConfig::default(),
            len: 0,
        }
    }

    pub fn with_config(boundary: Rect<T>, config: QuadtreeConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            root: Node::new(boundary),
            config,
            len: 0,
        })
    }

    pub fn boundary(&self) -> Rect<T> {
        self.root.boundary
    }

    pub fn config(&self) -> &QuadtreeConfig<T> {
        &self.config
    }

    /// Number of points stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every point and every child node, keeping the boundary and the configuration.
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.boundary);
        self.len = 0;
    }

    /// Returns whether the point was stored.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Returns `Err` with the reason the point was dropped.
    pub fn try_insert(&mut self, point: Point<T>) -> Result<(), InsertError> {
        self.root.insert(point, &self.config, 0)?;
        self.len += 1;
        Ok(())
    }

    /// Collect every stored point contained in `range`, in depth-first north-west, north-east,
    /// south-west, south-east order.
    pub fn query_range(&self, range: Rect<T>) -> PointBuffer<T> {
        let mut out = PointBuffer::default();
        self.query_range_into(range, &mut out);
        out
    }

    /// Append the points contained in `range` to `out`. Returns the number of nodes visited,
    /// pruned nodes excluded.
    pub fn query_range_into(&self, range: Rect<T>, out: &mut PointBuffer<T>) -> usize {
        self.root.query_range(&range, out)
    }

    /// Same result, in the same order, as [`Quadtree::query_range`]. Sibling subtrees are
    /// searched on the rayon thread pool.
    pub fn par_query_range(&self, range: Rect<T>) -> PointBuffer<T>
    where
        T: Send + Sync,
    {
        let mut found = Vec::new();
        self.root.par_query_range(&range, &mut found);

        let mut out = PointBuffer::default();
        out.extend(found);
        out
    }

    /// Return whether a point with exactly these coordinates is stored.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.root.contains(point)
    }

    /// Pre-order walk over every node, yielding its boundary and the points it stores.
    pub fn traverse(&self) -> Traverse<'_, T> {
        Traverse::new(&self.root)
    }

    pub fn node_count(&self) -> usize {
        self.traverse().count()
    }

    /// Depth of the deepest node. A lone root has depth 0.
    pub fn depth(&self) -> usize {
        self.traverse().map(|n| n.depth).max().unwrap_or(0)
    }
}

impl<T: Scalar> Extend<Point<T>> for Quadtree<T> {
    /// Insert every point, dropping the ones that are rejected.
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point<T>>,
    {
        let mut dropped = 0usize;
        for p in it {
            if self.try_insert(p).is_err() {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(dropped, "points were rejected during extend");
        }
    }
}

impl<T: Scalar> Node<T> {
    fn new(boundary: Rect<T>) -> Self {
        Self {
            boundary,
            children: None,
            points: ArrayVec::new(),
        }
    }

    fn insert(
        &mut self,
        point: Point<T>,
        config: &QuadtreeConfig<T>,
        depth: usize,
    ) -> Result<(), InsertError> {
        if !self.boundary.contains_point(&point) {
            return Err(InsertError::OutOfBounds);
        }

        if self.children.is_none() {
            if self.points.len() < config.capacity {
                // there was capacity left in this node. We're done.
                self.points.push(point);
                return Ok(());
            }
            self.subdivide(config, depth)?;
        }

        // quadrants are half-open, so at most one child can accept the point
        if let Some(children) = self.children.as_mut() {
            for child in children.iter_mut() {
                match child.insert(point, config, depth + 1) {
                    Err(InsertError::OutOfBounds) => continue,
                    res => return res,
                }
            }
        }

        debug!(depth, boundary = ?self.boundary, point = ?point, "no quadrant covers point");
        Err(InsertError::Uncovered { depth })
    }

    /// Refuses when the children would be smaller than `config.min_extent`, which bounds the
    /// depth of the tree even when many points share a coordinate.
    ///
    /// Also refuses when a child could not contain any point: an integer extent of 1 halves to
    /// 0, leaving the empty range `[x, x)`.
    fn subdivide(&mut self, config: &QuadtreeConfig<T>, depth: usize) -> Result<(), InsertError> {
        debug_assert!(self.children.is_none());

        let sub_w = self.boundary.w.half();
        let sub_h = self.boundary.h.half();
        let too_small = sub_w < config.min_extent || sub_h < config.min_extent;
        let empty = !(sub_w.half() > T::ZERO && sub_h.half() > T::ZERO);
        if too_small || empty {
            warn!(
                depth,
                boundary = ?self.boundary,
                min_extent = ?config.min_extent,
                "refusing to subdivide, point dropped"
            );
            return Err(InsertError::SubdivisionRefused { depth });
        }

        trace!(depth, boundary = ?self.boundary, "subdividing");
        self.children = Some(Box::new(self.boundary.quadrants().map(Node::new)));
        Ok(())
    }

    fn query_range(&self, range: &Rect<T>, out: &mut PointBuffer<T>) -> usize {
        if self.boundary.is_disjoint(range) {
            return 0;
        }

        for p in self.points.iter() {
            if range.contains_point(p) {
                out.push(*p);
            }
        }

        let mut visited = 1;
        if let Some(ref children) = self.children {
            for child in children.iter() {
                visited += child.query_range(range, out);
            }
        }
        visited
    }

    fn par_query_range(&self, range: &Rect<T>, out: &mut Vec<Point<T>>)
    where
        T: Send + Sync,
    {
        if self.boundary.is_disjoint(range) {
            return;
        }

        out.extend(self.points.iter().filter(|p| range.contains_point(p)));

        if let Some(ref children) = self.children {
            let [nw, ne, sw, se] = &**children;
            let (north, south) = rayon::join(
                || {
                    let mut found = Vec::new();
                    nw.par_query_range(range, &mut found);
                    ne.par_query_range(range, &mut found);
                    found
                },
                || {
                    let mut found = Vec::new();
                    sw.par_query_range(range, &mut found);
                    se.par_query_range(range, &mut found);
                    found
                },
            );
            out.extend(north);
            out.extend(south);
        }
    }

    fn contains(&self, point: &Point<T>) -> bool {
        if !self.boundary.contains_point(point) {
            return false;
        }

        // if this node contains this point then we're done
        if self.points.iter().any(|p| p == point) {
            return true;
        }

        match self.children {
            Some(ref children) => children.iter().any(|child| child.contains(point)),
            None => false,
        }
    }
}
