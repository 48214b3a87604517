use crate::{Point, Scalar};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its center and its full width and height.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect<T = i32> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl<T: Scalar> Rect<T> {
    pub fn new(x: T, y: T, w: T, h: T) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Point<T> {
        Point::new(self.x, self.y)
    }

    /// Inclusive lower corner. Integer corners clamp at the numeric bounds.
    pub fn min(&self) -> Point<T> {
        Point::new(
            self.x.saturating_sub(self.w.half()),
            self.y.saturating_sub(self.h.half()),
        )
    }

    /// Exclusive upper corner. Integer corners clamp at the numeric bounds.
    pub fn max(&self) -> Point<T> {
        Point::new(
            self.x.saturating_add(self.w.half()),
            self.y.saturating_add(self.h.half()),
        )
    }

    /// Half-open containment: the lower bound is inclusive, the upper bound exclusive.
    ///
    /// A point on the border shared by two sibling quadrants belongs to exactly one of them.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        let [x, y] = **point;
        let [minx, miny] = *self.min();
        let [maxx, maxy] = *self.max();

        minx <= x && x < maxx && miny <= y && y < maxy
    }

    /// Returns whether the two rectangles are separated along either axis.
    ///
    /// Touching edges do not count as separated, so pruning with this test never skips a
    /// rectangle that could still hold a matching point.
    pub fn is_disjoint(&self, other: &Rect<T>) -> bool {
        // separating axis test
        let [fromx, fromy] = *self.min();
        let [tox, toy] = *self.max();
        let [ofromx, ofromy] = *other.min();
        let [otox, otoy] = *other.max();

        tox < ofromx || fromx > otox || toy < ofromy || fromy > otoy
    }

    /// Split the rectangle in four equal quadrants, ordered north-west, north-east,
    /// south-west, south-east. North is towards positive `y`.
    ///
    /// The children are `w/2 x h/2` and their centers are offset by a quarter of the parent's
    /// extent. With integer coordinates both divisions truncate.
    pub fn quadrants(&self) -> [Rect<T>; 4] {
        let sub_w = self.w.half();
        let sub_h = self.h.half();
        let dx = sub_w.half();
        let dy = sub_h.half();

        // | nw | ne |
        // | -- | -- |
        // | sw | se |
        let (west, east) = (self.x.saturating_sub(dx), self.x.saturating_add(dx));
        let (south, north) = (self.y.saturating_sub(dy), self.y.saturating_add(dy));
        [
            Self::new(west, north, sub_w, sub_h),
            Self::new(east, north, sub_w, sub_h),
            Self::new(west, south, sub_w, sub_h),
            Self::new(east, south, sub_w, sub_h),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(400, 400, 800, 800);

        assert!(rect.contains_point(&Point::new(0, 0)));
        assert!(rect.contains_point(&Point::new(799, 799)));
        assert!(!rect.contains_point(&Point::new(800, 10)));
        assert!(!rect.contains_point(&Point::new(10, 800)));
        assert!(!rect.contains_point(&Point::new(-1, 10)));
    }

    #[test]
    fn nan_is_never_contained() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!rect.contains_point(&Point::new(f64::NAN, 0.0)));
    }

    #[test]
    fn corners_clamp_at_integer_limits() {
        let rect = Rect::new(i32::MAX - 1, i32::MIN + 1, 10, 10);

        assert_eq!(rect.min(), Point::new(i32::MAX - 6, i32::MIN));
        assert_eq!(rect.max(), Point::new(i32::MAX, i32::MIN + 6));
        assert!(rect.contains_point(&Point::new(i32::MAX - 1, i32::MIN)));
        assert!(!rect.contains_point(&Point::new(i32::MAX, i32::MIN)));

        let [nw, ne, sw, se] = Rect::new(i32::MAX, 0, 8, 8).quadrants();
        assert_eq!(ne.x, i32::MAX);
        assert_eq!(se.x, i32::MAX);
        assert_eq!(nw.x, i32::MAX - 2);
        assert_eq!(sw.y, -2);

        assert!(rect.is_disjoint(&Rect::new(0, 0, 10, 10)));
        assert!(!rect.is_disjoint(&Rect::new(i32::MAX, i32::MIN, 4, 4)));
    }

    #[test]
    fn disjoint_rectangles() {
        let a = Rect::new(0, 0, 10, 10);
        let touching = Rect::new(10, 0, 10, 10);
        let overlapping = Rect::new(4, 4, 10, 10);
        let far = Rect::new(100, 0, 10, 10);
        let above = Rect::new(0, 100, 10, 10);

        assert!(!a.is_disjoint(&touching));
        assert!(!a.is_disjoint(&overlapping));
        assert!(a.is_disjoint(&far));
        assert!(far.is_disjoint(&a));
        assert!(a.is_disjoint(&above));
    }

    #[test]
    fn quadrant_layout() {
        let [nw, ne, sw, se] = Rect::new(400, 400, 800, 800).quadrants();

        assert_eq!(nw, Rect::new(200, 600, 400, 400));
        assert_eq!(ne, Rect::new(600, 600, 400, 400));
        assert_eq!(sw, Rect::new(200, 200, 400, 400));
        assert_eq!(se, Rect::new(600, 200, 400, 400));
    }

    #[test]
    fn quadrants_tile_the_parent() {
        let parent = Rect::new(400, 400, 800, 800);
        let quadrants = parent.quadrants();

        let area: i32 = quadrants.iter().map(|q| q.w * q.h).sum();
        assert_eq!(area, parent.w * parent.h);

        for q in quadrants.iter() {
            assert!(parent.min()[0] <= q.min()[0] && q.max()[0] <= parent.max()[0]);
            assert!(parent.min()[1] <= q.min()[1] && q.max()[1] <= parent.max()[1]);
        }

        for x in (0..800).step_by(7).chain(vec![399, 400, 799]) {
            for y in (0..800).step_by(7).chain(vec![399, 400, 799]) {
                let p = Point::new(x, y);
                let owners = quadrants.iter().filter(|q| q.contains_point(&p)).count();
                assert_eq!(owners, 1, "{:?} is owned by {} quadrants", p, owners);
            }
        }
    }

    #[test]
    fn float_quadrants_have_exactly_one_owner() {
        let parent = Rect::new(0.0, 0.0, 8.0, 8.0);
        let quadrants = parent.quadrants();

        for i in 0..64 {
            for j in 0..64 {
                let p = Point::new(-4.0 + i as f64 * 0.125, -4.0 + j as f64 * 0.125);
                let owners = quadrants.iter().filter(|q| q.contains_point(&p)).count();
                assert_eq!(owners, 1, "{:?}", p);
            }
        }
    }

    #[test]
    fn odd_integer_extents_truncate() {
        let [nw, _, _, se] = Rect::new(0, 0, 6, 6).quadrants();

        assert_eq!(nw, Rect::new(-1, 1, 3, 3));
        assert_eq!(se, Rect::new(1, -1, 3, 3));
        // the parent spans [-3, 3) but its quadrants only cover [-2, 2)
        assert!(!nw.contains_point(&Point::new(-3, 0)));
    }
}
