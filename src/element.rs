//! Rope elements: point masses and the massless springs between them.
//!
//! Points and springs refer to each other through plain indices into the
//! storage owned by [`Rope`](crate::rope::Rope). Neither side owns the other.

use crate::float::Float;
use crate::vec::Vec;

/// Which neighbor slot of a point, or which end of a spring.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Index of a [`Point`] inside its rope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Index of a [`Spring`] inside its rope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpringId(pub usize);

/// A point mass.
#[derive(Clone, Debug)]
pub struct Point<V: Vec> {
    pub pos: V,
    pub vel: V,
    pub mass: V::Scalar,
    /// Coefficient of the force opposing the velocity relative to each neighbor.
    pub damping: V::Scalar,
    /// Fixed points are never moved by the integrator.
    pub fixed: bool,
    springs: [Option<SpringId>; 2],
}

impl<V: Vec> Point<V> {
    pub fn new(pos: V, mass: V::Scalar) -> Self {
        Point {
            pos,
            vel: V::zero(),
            mass,
            damping: V::Scalar::zero(),
            fixed: false,
            springs: [None, None],
        }
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Spring attached on `side`, if any.
    pub fn spring(&self, side: Side) -> Option<SpringId> {
        self.springs[side.index()]
    }

    /// Record `spring` in this point's `side` slot and back-link the spring.
    ///
    /// The spring stores `this` at its `side.opposite()` end: a point whose
    /// left slot holds a spring sits at that spring's right end.
    pub fn attach_spring(&mut self, this: PointId, side: Side, id: SpringId, spring: &mut Spring<V>) {
        self.springs[side.index()] = Some(id);
        spring.points[side.opposite().index()] = Some(this);
    }
}

/// A massless Hooke's-law spring.
#[derive(Clone, Debug)]
pub struct Spring<V: Vec> {
    pub k: V::Scalar,
    pub default_length: V::Scalar,
    points: [Option<PointId>; 2],
}

impl<V: Vec> Spring<V> {
    pub fn new(k: V::Scalar, default_length: V::Scalar) -> Self {
        Spring { k, default_length, points: [None, None] }
    }

    /// Point at this spring's `side` end.
    ///
    /// Seen from a point holding this spring in its `side` slot, this is the
    /// neighbor across the spring.
    pub fn point(&self, side: Side) -> Option<PointId> {
        self.points[side.index()]
    }

    /// Position of the point at the `side` end.
    pub fn get_pos(&self, side: Side, points: &[Point<V>]) -> Option<V> {
        self.point(side).map(|id| points[id.0].pos)
    }

    /// Velocity of the point at the `side` end.
    pub fn get_vel(&self, side: Side, points: &[Point<V>]) -> Option<V> {
        self.point(side).map(|id| points[id.0].vel)
    }

    /// Distance between the two ends, `None` while an end is unattached.
    pub fn current_length(&self, points: &[Point<V>]) -> Option<V::Scalar> {
        let left = self.get_pos(Side::Left, points)?;
        let right = self.get_pos(Side::Right, points)?;
        Some(left.distance(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    #[test]
    fn opposite_sides() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::BOTH.map(Side::index), [0, 1]);
    }

    #[test]
    fn attach_links_both_ways() {
        let mut points = vec![
            Point::new(Vec2::new(0.0f64, 0.0), 1.0),
            Point::new(Vec2::new(3.0f64, 4.0), 1.0),
        ];
        let mut spring = Spring::new(10.0, 4.0);
        points[0].attach_spring(PointId(0), Side::Right, SpringId(0), &mut spring);
        points[1].attach_spring(PointId(1), Side::Left, SpringId(0), &mut spring);

        assert_eq!(points[0].spring(Side::Right), Some(SpringId(0)));
        assert_eq!(points[0].spring(Side::Left), None);
        assert_eq!(spring.point(Side::Left), Some(PointId(0)));
        assert_eq!(spring.point(Side::Right), Some(PointId(1)));

        // From point 1 (spring on its left), the neighbor is at the left end.
        assert_eq!(spring.get_pos(Side::Left, &points), Some(Vec2::new(0.0, 0.0)));
        assert!((spring.current_length(&points).unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn unattached_spring_has_no_length() {
        let points: [Point<Vec2<f64>>; 0] = [];
        let spring: Spring<Vec2<f64>> = Spring::new(1.0, 1.0);
        assert_eq!(spring.current_length(&points), None);
        assert_eq!(spring.get_vel(Side::Right, &points), None);
    }
}
