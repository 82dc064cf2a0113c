//! Closed-form reference shapes for a hanging rope.
//!
//! Two stateless solvers, used to validate the simulated equilibrium:
//!
//! - the inextensible **catenary** through two supports at equal height,
//!   found from the half-span and the sag;
//! - the **elastic cable**, whose slope `z` obeys the implicit equation
//!   `z = sinh(x/a − b·z)` and is integrated to a vertical profile.

use crate::config::ElasticRopeConfig;
use crate::error::RopeError;
use crate::float::Float;
use crate::roots::{bisect, newton, RootOptions};
use alloc::vec::Vec as AllocVec;

/// Number of samples used by [`solve_catenary`] and [`solve_elastic_rope`].
pub const DEFAULT_SAMPLES: usize = 100;

/// Largest accepted `|a·acosh(y0/a + 1) − x0|`.
const CATENARY_TOLERANCE: f64 = 1e-4;
/// Seeds for the catenary parameter, log-spaced over `[0.1, 1e4]`.
const CATENARY_SEEDS: usize = 50;
const CATENARY_SEED_MIN: f64 = 0.1;
const CATENARY_SEED_MAX: f64 = 1e4;

/// A curve sampled at increasing `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct SampledCurve<F: Float> {
    pub x: AllocVec<F>,
    pub y: AllocVec<F>,
}

impl<F: Float> SampledCurve<F> {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Lowest `y` value.
    pub fn min_y(&self) -> Option<F> {
        self.y.iter().copied().reduce(F::min)
    }
}

/// Catenary through `(0, 0)` and `(2·x0, 0)` with sag `y0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Catenary<F: Float> {
    /// `a = T_H / w`.
    pub shape_parameter: F,
    pub curve: SampledCurve<F>,
}

/// `a·(cosh((x − x0)/a) − cosh(x0/a))`: zero at `x = 0` and `x = 2·x0`.
pub fn catenary_shape<F: Float>(x: F, half_span: F, a: F) -> F {
    a * (((x - half_span) / a).cosh() - (half_span / a).cosh())
}

/// Solve `a·acosh(y0/a + 1) = x0` for the catenary parameter `a`.
///
/// Newton's method is tried from log-spaced seeds until one converges with a
/// residual below `1e-4`.
pub fn solve_catenary_parameter<F: Float>(half_span: F, sag: F) -> Result<F, RopeError> {
    if !(half_span > F::zero()) || !half_span.is_finite() {
        return Err(RopeError::InvalidConfiguration("half-span must be positive"));
    }
    if !(sag > F::zero()) || !sag.is_finite() {
        return Err(RopeError::InvalidConfiguration("sag must be positive"));
    }

    let residual = |a: F| {
        let u = F::one() + sag / a;
        let g = a * u.acosh() - half_span;
        let dg = u.acosh() - sag / (a * (u * u - F::one()).sqrt());
        (g, dg)
    };
    let options = RootOptions::new().with_lower_bound(F::zero());
    let tolerance = F::from_f64(CATENARY_TOLERANCE);

    let log_min = F::from_f64(CATENARY_SEED_MIN).ln();
    let log_max = F::from_f64(CATENARY_SEED_MAX).ln();
    for seed in linspace(log_min, log_max, CATENARY_SEEDS).into_iter().map(F::exp) {
        match newton(residual, seed, &options) {
            Some(root) if root.residual.abs() < tolerance && root.x > F::zero() => {
                log::debug!("catenary parameter a = {:?} from seed {:?}", root.x, seed);
                return Ok(root.x);
            }
            other => log::trace!("catenary seed {:?} rejected: {:?}", seed, other),
        }
    }

    Err(RopeError::Convergence { what: "catenary parameter", attempts: CATENARY_SEEDS })
}

/// Catenary with half-span `x0` and sag `y0`, sampled at
/// [`DEFAULT_SAMPLES`] points over `[0, 2·x0]`.
pub fn solve_catenary<F: Float>(half_span: F, sag: F) -> Result<Catenary<F>, RopeError> {
    solve_catenary_with_samples(half_span, sag, DEFAULT_SAMPLES)
}

pub fn solve_catenary_with_samples<F: Float>(
    half_span: F,
    sag: F,
    samples: usize,
) -> Result<Catenary<F>, RopeError> {
    check_samples(samples)?;
    let a = solve_catenary_parameter(half_span, sag)?;
    let x = linspace(F::zero(), half_span * F::two(), samples);
    let y = x.iter().map(|&xi| catenary_shape(xi, half_span, a)).collect();
    Ok(Catenary { shape_parameter: a, curve: SampledCurve { x, y } })
}

/// Elastic cable with horizontal tension `T_H` over a gap `G`, sampled at
/// [`DEFAULT_SAMPLES`] points.
///
/// With `a = T_H/w` and `b = T_H/(E·A)`, the slope at each `x ∈ [−G/2, G/2]`
/// solves `z = sinh(x/a − b·z)`. The slopes are integrated with the
/// trapezoidal rule from zero at the first sample. The returned `x` is
/// shifted to `[0, G]` to share the catenary's frame.
pub fn solve_elastic_rope<F: Float>(
    horizontal_tension: F,
    gap_length: F,
    weight_density: F,
    area: F,
    elastic_constant: F,
) -> Result<SampledCurve<F>, RopeError> {
    let config = ElasticRopeConfig { weight_density, cross_section_area: area, elastic_constant };
    solve_elastic_rope_with_samples(horizontal_tension, gap_length, &config, DEFAULT_SAMPLES)
}

pub fn solve_elastic_rope_with_samples<F: Float>(
    horizontal_tension: F,
    gap_length: F,
    config: &ElasticRopeConfig<F>,
    samples: usize,
) -> Result<SampledCurve<F>, RopeError> {
    check_samples(samples)?;
    if !(horizontal_tension > F::zero()) || !horizontal_tension.is_finite() {
        return Err(RopeError::InvalidConfiguration("horizontal tension must be positive"));
    }
    if !(gap_length > F::zero()) || !gap_length.is_finite() {
        return Err(RopeError::InvalidConfiguration("gap length must be positive"));
    }
    if !(config.weight_density > F::zero()) {
        return Err(RopeError::InvalidConfiguration("weight density must be positive"));
    }
    let stiffness = config.elastic_constant * config.cross_section_area;
    if !(stiffness > F::zero()) {
        return Err(RopeError::InvalidConfiguration("axial stiffness must be positive"));
    }

    let a = horizontal_tension / config.weight_density;
    let b = a * config.weight_density / stiffness;
    let half_gap = gap_length * F::half();
    let x = linspace(-half_gap, half_gap, samples);

    let slopes = x
        .iter()
        .map(|&xi| elastic_slope(xi, a, b))
        .collect::<Result<AllocVec<F>, RopeError>>()?;
    let y = cumulative_trapezoid(&slopes, &x);

    Ok(SampledCurve { x: x.into_iter().map(|xi| xi + half_gap).collect(), y })
}

/// Root of `z − sinh(x/a − b·z)`, Newton from `sinh(x/a)/(b + 1)`.
///
/// The residual is strictly increasing in `z` and changes sign between `0`
/// and `sinh(x/a)`, so bisection on that bracket is the fallback.
fn elastic_slope<F: Float>(x: F, a: F, b: F) -> Result<F, RopeError> {
    let options = RootOptions::new();
    let tolerance = F::from_f64(1e-9).max(F::epsilon() * F::from_f64(64.0));
    let explicit = (x / a).sinh();
    let accept = |z: F, residual: F| residual.abs() <= tolerance * (F::one() + z.abs());

    let seed = explicit / (b + F::one());
    let with_derivative = |z: F| {
        let arg = x / a - b * z;
        (z - arg.sinh(), F::one() + b * arg.cosh())
    };
    if let Some(root) = newton(with_derivative, seed, &options) {
        if accept(root.x, root.residual) {
            return Ok(root.x);
        }
    }

    log::warn!("elastic slope at x = {:?}: newton failed, bisecting", x);
    let value = |z: F| z - (x / a - b * z).sinh();
    match bisect(value, F::zero().min(explicit), F::zero().max(explicit), &options) {
        Some(root) if accept(root.x, root.residual) => Ok(root.x),
        _ => Err(RopeError::Convergence { what: "elastic cable slope", attempts: 2 }),
    }
}

/// Cumulative trapezoidal integral of `y` over `x`, starting at zero.
///
/// The output has the same length as the inputs.
pub fn cumulative_trapezoid<F: Float>(y: &[F], x: &[F]) -> AllocVec<F> {
    let mut out = AllocVec::with_capacity(y.len());
    let mut acc = F::zero();
    if !y.is_empty() {
        out.push(acc);
    }
    for i in 1..y.len().min(x.len()) {
        acc = acc + (x[i] - x[i - 1]) * (y[i] + y[i - 1]) * F::half();
        out.push(acc);
    }
    out
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace<F: Float>(start: F, end: F, n: usize) -> AllocVec<F> {
    match n {
        0 => AllocVec::new(),
        1 => alloc::vec![start],
        _ => {
            let last = F::from_usize(n - 1);
            (0..n).map(|i| start + (end - start) * F::from_usize(i) / last).collect()
        }
    }
}

fn check_samples(samples: usize) -> Result<(), RopeError> {
    if samples < 2 {
        return Err(RopeError::InvalidConfiguration("at least two samples are required"));
    }
    Ok(())
}
