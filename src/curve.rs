//! Arc-length parametrized curves describing a rope's initial shape.

use crate::error::RopeError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// A curve parametrized by its own arc length.
pub trait Curve<V: Vec> {
    /// Total arc length.
    fn length(&self) -> V::Scalar;

    /// Point at arc length `s`, for `s` in `[0, length]`.
    fn at(&self, s: V::Scalar) -> V;
}

/// Straight segment from `start` to `end`.
#[derive(Copy, Clone, Debug)]
pub struct Line<V: Vec> {
    start: V,
    dir: V,
    length: V::Scalar,
}

impl<V: Vec> Line<V> {
    pub fn new(start: V, end: V) -> Result<Self, RopeError> {
        let delta = end - start;
        let length = delta.length();
        let dir = delta
            .try_normalize(V::Scalar::from_f64(1e-12))
            .ok_or(RopeError::InvalidConfiguration("line endpoints coincide"))?;
        Ok(Line { start, dir, length })
    }
}

impl<V: Vec> Curve<V> for Line<V> {
    fn length(&self) -> V::Scalar {
        self.length
    }

    fn at(&self, s: V::Scalar) -> V {
        self.start + self.dir.scale(s)
    }
}

/// U-shaped curve hanging from the origin: down by `height`, across by
/// `width`, back up by `height`.
#[derive(Copy, Clone, Debug)]
pub struct UCurve<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> UCurve<F> {
    pub fn new(width: F, height: F) -> Result<Self, RopeError> {
        if !(width > F::zero()) || !(height >= F::zero()) {
            return Err(RopeError::InvalidConfiguration("u-curve needs positive width and non-negative height"));
        }
        Ok(UCurve { width, height })
    }
}

impl<F: Float> Curve<Vec2<F>> for UCurve<F> {
    fn length(&self) -> F {
        self.width + self.height + self.height
    }

    fn at(&self, s: F) -> Vec2<F> {
        if s < self.height {
            Vec2::new(F::zero(), -s)
        } else if s < self.height + self.width {
            Vec2::new(s - self.height, -self.height)
        } else {
            Vec2::new(self.width, s - self.height - self.width - self.height)
        }
    }
}
