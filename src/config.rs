//! Configuration types for rope construction, the integrator and the
//! analytical references.

use crate::error::RopeError;
use crate::float::Float;
use crate::vec::Vec;

/// Gravitational acceleration used to convert between mass and weight density.
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Macroscopic properties of the physical rope being modeled. SI units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RopeConfig<F: Float> {
    /// Young's modulus of the material.
    pub elastic_constant: F,
    pub diameter: F,
    /// Mass per unit length.
    pub mass_density: F,
}

impl<F: Float> RopeConfig<F> {
    pub fn with_mass_density(elastic_constant: F, diameter: F, mass_density: F) -> Self {
        RopeConfig { elastic_constant, diameter, mass_density }
    }

    pub fn with_weight_density(elastic_constant: F, diameter: F, weight_density: F) -> Self {
        RopeConfig {
            elastic_constant,
            diameter,
            mass_density: weight_density / F::from_f64(STANDARD_GRAVITY),
        }
    }

    /// Weight per unit length.
    pub fn weight_density(&self) -> F {
        self.mass_density * F::from_f64(STANDARD_GRAVITY)
    }

    /// Cross-section area of a round rope.
    pub fn area(&self) -> F {
        let r = self.diameter * F::half();
        F::pi() * r * r
    }

    /// Parameters for [`solve_elastic_rope`](crate::analytical::solve_elastic_rope).
    pub fn elastic(&self) -> ElasticRopeConfig<F> {
        ElasticRopeConfig {
            weight_density: self.weight_density(),
            cross_section_area: self.area(),
            elastic_constant: self.elastic_constant,
        }
    }
}

/// The one element property that is given; the other two are derived from a
/// [`RopeConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementSizing<F: Float> {
    Length(F),
    Stiffness(F),
    Mass(F),
}

/// Properties of one rope element: a point mass plus the spring to its left.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementConfig<F: Float> {
    /// Spring constant.
    pub stiffness: F,
    /// Spring rest length, also the spacing of nodes along the source curve.
    pub length: F,
    pub mass: F,
    /// Factor of the force opposing the velocity relative to each neighbor.
    pub damping: F,
}

impl<F: Float> ElementConfig<F> {
    pub fn new(stiffness: F, length: F, mass: F) -> Self {
        ElementConfig { stiffness, length, mass, damping: F::zero() }
    }

    /// Resolve element properties so the chain has the same axial stiffness
    /// (`k = E·A/ℓ`) and mass density (`m = ρ·ℓ`) as `rope`.
    pub fn from_rope(rope: &RopeConfig<F>, sizing: ElementSizing<F>, damping: F) -> Result<Self, RopeError> {
        let ea = rope.elastic_constant * rope.area();
        if !(ea > F::zero()) || !(rope.mass_density > F::zero()) {
            return Err(RopeError::InvalidConfiguration("rope properties must be positive"));
        }
        let (stiffness, length, mass) = match sizing {
            ElementSizing::Length(length) => (ea / length, length, rope.mass_density * length),
            ElementSizing::Stiffness(k) => {
                let length = ea / k;
                (k, length, rope.mass_density * length)
            }
            ElementSizing::Mass(mass) => {
                let length = mass / rope.mass_density;
                (ea / length, length, mass)
            }
        };
        let config = ElementConfig { stiffness, length, mass, damping };
        config.validate()?;
        Ok(config)
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn validate(&self) -> Result<(), RopeError> {
        if !(self.length > F::zero()) || !self.length.is_finite() {
            return Err(RopeError::InvalidConfiguration("element length must be positive"));
        }
        if !(self.mass > F::zero()) || !self.mass.is_finite() {
            return Err(RopeError::InvalidConfiguration("element mass must be positive"));
        }
        if !(self.stiffness >= F::zero()) || !self.stiffness.is_finite() {
            return Err(RopeError::InvalidConfiguration("stiffness must be non-negative"));
        }
        if !(self.damping >= F::zero()) {
            return Err(RopeError::InvalidConfiguration("damping must be non-negative"));
        }
        Ok(())
    }
}

/// How a rope is laid along its source curve.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateConfig<F: Float> {
    /// After a node is placed the curve parameter advances by
    /// `length * multiplier`. Above 1 a straight rope starts pre-tensioned.
    pub multiplier: F,
    /// Pin the last node in place as well as the first.
    pub fix_last: bool,
}

impl<F: Float> CreateConfig<F> {
    pub fn new() -> Self {
        CreateConfig { multiplier: F::one(), fix_last: true }
    }

    pub fn with_multiplier(mut self, multiplier: F) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_fix_last(mut self, fix_last: bool) -> Self {
        self.fix_last = fix_last;
        self
    }
}

impl<F: Float> Default for CreateConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Properties entering the elastic-cable equation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticRopeConfig<F: Float> {
    pub weight_density: F,
    pub cross_section_area: F,
    pub elastic_constant: F,
}

/// Configuration for the RK4 integrator.
///
/// # Builder Pattern
/// ```
/// use ropesim::config::SolverConfig;
/// use ropesim::vec::Vec2;
///
/// let config: SolverConfig<Vec2<f64>> = SolverConfig::new()
///     .with_gravity(Vec2::new(0.0, -9.8));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct SolverConfig<V: Vec> {
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: V,
}

impl<V: Vec> SolverConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig { gravity: V::zero() }
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }
}

impl<V: Vec> Default for SolverConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
