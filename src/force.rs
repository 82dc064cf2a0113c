//! Force model: Hooke springs, relative-velocity damping and gravity.

use crate::element::{PointId, Side};
use crate::error::RopeError;
use crate::float::Float;
use crate::rope::Rope;
use crate::vec::Vec;

/// Springs shorter than this are treated as having coincident ends.
const MIN_SPRING_LENGTH: f64 = 1e-12;

/// Forces acting on one node through its springs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringForces<V: Vec> {
    /// Sum of the elastic forces over the requested sides.
    pub elastic: V,
    /// Sum of the damping forces over the requested sides.
    pub damping: V,
    /// Largest single-side elastic force magnitude.
    pub tension: V::Scalar,
}

/// Elastic and damping forces exerted on `node` by its springs on `sides`.
///
/// Each spring pulls the node towards its neighbor when stretched and pushes
/// it away when compressed, with magnitude `k·(length − rest_length)`.
/// Damping opposes the node's velocity relative to the neighbor across that
/// spring. Empty slots are skipped.
pub fn spring_forces<V: Vec>(
    rope: &Rope<V>,
    node: PointId,
    sides: &[Side],
) -> Result<SpringForces<V>, RopeError> {
    let points = rope.points();
    let point = &points[node.0];
    let mut elastic = V::zero();
    let mut damping = V::zero();
    let mut tension = V::Scalar::zero();

    for &side in sides {
        let Some(id) = point.spring(side) else {
            continue;
        };
        let spring = &rope.springs()[id.0];
        let (Some(left), Some(right), Some(neighbor_vel)) = (
            spring.get_pos(Side::Left, points),
            spring.get_pos(Side::Right, points),
            spring.get_vel(side, points),
        ) else {
            return Err(RopeError::InvalidConfiguration("spring is missing an endpoint"));
        };

        // Points from the neighbor towards `node` for either side.
        let mut vec = right - left;
        if side == Side::Right {
            vec = -vec;
        }
        let length = vec.length();
        let dir = vec
            .try_normalize(V::Scalar::from_f64(MIN_SPRING_LENGTH))
            .ok_or(RopeError::DegenerateGeometry { spring: id.0 })?;

        let magnitude = spring.k * (length - spring.default_length);
        elastic = elastic + dir.scale(-magnitude);
        tension = tension.max(magnitude.abs());

        damping = damping + (point.vel - neighbor_vel).scale(-point.damping);
    }

    Ok(SpringForces { elastic, damping, tension })
}

/// Acceleration of `node` and the tension it reports.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointAcceleration<V: Vec> {
    pub acceleration: V,
    pub tension: V::Scalar,
}

/// `(elastic + damping + weight) / mass`, with `weight = gravity · mass`.
///
/// Evaluated for fixed points too; callers decide whether to use the result.
pub fn point_acceleration<V: Vec>(
    rope: &Rope<V>,
    node: PointId,
    gravity: V,
) -> Result<PointAcceleration<V>, RopeError> {
    let forces = spring_forces(rope, node, &Side::BOTH)?;
    let mass = rope.point(node.0).mass;
    let weight = gravity.scale(mass);
    let acceleration = (forces.elastic + forces.damping + weight).scale(V::Scalar::one() / mass);
    Ok(PointAcceleration { acceleration, tension: forces.tension })
}

/// Mechanical energy bookkeeping for drift checks.
///
/// `Σ m·|v|² + Σ k·(length − rest)² − Σ 2·m·(g · pos)`: every term is twice
/// its physical value, so only relative changes are meaningful.
pub fn energy<V: Vec>(rope: &Rope<V>, gravity: V) -> V::Scalar {
    let points = rope.points();
    let two = V::Scalar::two();

    let kinetic_and_gravity = points.iter().fold(V::Scalar::zero(), |acc, p| {
        acc + p.mass * p.vel.length_sq() - two * p.mass * gravity.dot(p.pos)
    });

    rope.springs().iter().fold(kinetic_and_gravity, |acc, s| match s.current_length(points) {
        Some(length) => {
            let stretch = length - s.default_length;
            acc + s.k * stretch * stretch
        }
        None => acc,
    })
}
