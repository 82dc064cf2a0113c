//! Rope built from point masses and springs laid along a parametric curve.

use crate::config::{CreateConfig, ElementConfig};
use crate::curve::Curve;
use crate::element::{Point, PointId, Side, Spring, SpringId};
use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// A linear chain of points joined by springs.
///
/// Owns every point and spring. The number of points is fixed at
/// construction; positions and velocities change every solver step.
#[derive(Clone, Debug)]
pub struct Rope<V: Vec> {
    points: AllocVec<Point<V>>,
    springs: AllocVec<Spring<V>>,
}

impl<V: Vec> Rope<V> {
    /// Lay a rope along `curve`.
    ///
    /// The first node sits at `curve.at(0)`, is fixed and carries half the
    /// element mass. Further nodes are sampled at `s = ℓ + j·ℓ·μ` while
    /// `s < L`. The last sampled node is then moved onto `curve.at(L)`, its
    /// mass halved and fixed if `create.fix_last`. When `L ≤ ℓ` the rope is
    /// just the two fixed endpoints with no spring between them.
    pub fn build<C: Curve<V>>(
        curve: &C,
        element: &ElementConfig<V::Scalar>,
        create: &CreateConfig<V::Scalar>,
    ) -> Result<Self, RopeError> {
        element.validate()?;
        let step = element.length * create.multiplier;
        if !(step > V::Scalar::zero()) || !step.is_finite() {
            return Err(RopeError::InvalidConfiguration("spacing multiplier must be positive"));
        }
        let total = curve.length();
        if !(total > V::Scalar::zero()) || !total.is_finite() {
            return Err(RopeError::InvalidConfiguration("curve must have positive length"));
        }

        let half_mass = element.mass * V::Scalar::half();
        let first = Point::new(curve.at(V::Scalar::zero()), half_mass).with_fixed(true);

        if !(element.length < total) {
            let last = Point::new(curve.at(total), half_mass)
                .with_damping(element.damping)
                .with_fixed(true);
            log::debug!("curve shorter than one element, rope reduced to its endpoints");
            return Ok(Rope { points: alloc::vec![first, last], springs: AllocVec::new() });
        }

        let mut rope = Rope { points: alloc::vec![first], springs: AllocVec::new() };
        let mut j = 0;
        loop {
            let s = element.length + V::Scalar::from_usize(j) * step;
            if !(s < total) {
                break;
            }
            let point = Point::new(curve.at(s), element.mass).with_damping(element.damping);
            rope.push_linked(point, Spring::new(element.stiffness, element.length));
            j += 1;
        }

        if let Some(last) = rope.points.last_mut() {
            last.pos = curve.at(total);
            last.mass = last.mass * V::Scalar::half();
            if create.fix_last {
                last.fixed = true;
            }
        }

        log::debug!(
            "built rope with {} points and {} springs",
            rope.points.len(),
            rope.springs.len(),
        );
        Ok(rope)
    }

    /// Append `point` and join it to the current last point with `spring`.
    fn push_linked(&mut self, point: Point<V>, spring: Spring<V>) {
        let prev = PointId(self.points.len() - 1);
        let this = PointId(self.points.len());
        let sid = SpringId(self.springs.len());
        self.points.push(point);
        self.springs.push(spring);

        let spring = &mut self.springs[sid.0];
        self.points[this.0].attach_spring(this, Side::Left, sid, spring);
        self.points[prev.0].attach_spring(prev, Side::Right, sid, spring);
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_springs(&self) -> usize {
        self.springs.len()
    }

    pub fn points(&self) -> &[Point<V>] {
        &self.points
    }

    pub fn springs(&self) -> &[Spring<V>] {
        &self.springs
    }

    pub fn point(&self, index: usize) -> &Point<V> {
        &self.points[index]
    }

    /// Mutable access for setting initial conditions. Topology stays fixed.
    pub fn point_mut(&mut self, index: usize) -> &mut Point<V> {
        &mut self.points[index]
    }

    pub(crate) fn points_mut(&mut self) -> &mut [Point<V>] {
        &mut self.points
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.points.iter().map(|p| p.pos).collect()
    }

    pub fn velocities(&self) -> AllocVec<V> {
        self.points.iter().map(|p| p.vel).collect()
    }

    /// Sum of the current spring lengths.
    pub fn stretched_length(&self) -> V::Scalar {
        self.springs
            .iter()
            .filter_map(|s| s.current_length(&self.points))
            .fold(V::Scalar::zero(), |acc, l| acc + l)
    }
}
