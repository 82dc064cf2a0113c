//! Scalar root finding for the analytical solvers.

use crate::float::Float;

/// Stopping rules for [`newton`] and [`bisect`].
#[derive(Copy, Clone, Debug)]
pub struct RootOptions<F: Float> {
    pub max_iterations: usize,
    /// Stop once `|f(x)|` is at most this.
    pub f_tolerance: F,
    /// Stop once a step is at most `x_tolerance · (1 + |x|)`.
    pub x_tolerance: F,
    /// Iterates are kept strictly above this bound.
    pub lower_bound: Option<F>,
}

impl<F: Float> RootOptions<F> {
    pub fn new() -> Self {
        let eps = F::epsilon();
        RootOptions {
            max_iterations: 100,
            f_tolerance: F::from_f64(1e-12).max(eps * F::from_f64(16.0)),
            x_tolerance: eps * F::from_f64(4.0),
            lower_bound: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_lower_bound(mut self, bound: F) -> Self {
        self.lower_bound = Some(bound);
        self
    }
}

impl<F: Float> Default for RootOptions<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A converged iterate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Root<F: Float> {
    pub x: F,
    /// `f(x)` at the returned iterate.
    pub residual: F,
    pub iterations: usize,
}

/// Newton's method for `f`, which returns `(f(x), f'(x))`.
///
/// Returns `None` if an iterate leaves the finite range, the derivative
/// vanishes, or the iteration budget runs out. A returned root only met one
/// of the stopping rules; callers check `residual` against their own
/// acceptance tolerance.
pub fn newton<F, Fun>(mut f: Fun, x0: F, options: &RootOptions<F>) -> Option<Root<F>>
where
    F: Float,
    Fun: FnMut(F) -> (F, F),
{
    let mut x = x0;
    for iterations in 0..options.max_iterations {
        let (fx, dfx) = f(x);
        if !fx.is_finite() {
            return None;
        }
        if fx.abs() <= options.f_tolerance {
            return Some(Root { x, residual: fx, iterations });
        }
        if !dfx.is_finite() || dfx == F::zero() {
            return None;
        }

        let mut next = x - fx / dfx;
        if let Some(bound) = options.lower_bound {
            // Halve the distance to the bound instead of crossing it.
            if !(next > bound) {
                next = (x + bound) * F::half();
            }
        }
        if !next.is_finite() {
            return None;
        }

        let step = (next - x).abs();
        x = next;
        if step <= options.x_tolerance * (F::one() + x.abs()) {
            let (residual, _) = f(x);
            return residual.is_finite().then_some(Root { x, residual, iterations: iterations + 1 });
        }
    }
    None
}

/// Bisection on `[lo, hi]`, which must bracket a sign change of `f`.
pub fn bisect<F, Fun>(mut f: Fun, lo: F, hi: F, options: &RootOptions<F>) -> Option<Root<F>>
where
    F: Float,
    Fun: FnMut(F) -> F,
{
    let (mut lo, mut hi) = if lo < hi { (lo, hi) } else { (hi, lo) };
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if !f_lo.is_finite() || !f_hi.is_finite() {
        return None;
    }
    if f_lo == F::zero() {
        return Some(Root { x: lo, residual: f_lo, iterations: 0 });
    }
    if f_hi == F::zero() {
        return Some(Root { x: hi, residual: f_hi, iterations: 0 });
    }
    if (f_lo < F::zero()) == (f_hi < F::zero()) {
        return None;
    }

    for iterations in 0..options.max_iterations.max(1) * 4 {
        let mid = (lo + hi) * F::half();
        let f_mid = f(mid);
        if !f_mid.is_finite() {
            return None;
        }
        if f_mid.abs() <= options.f_tolerance
            || hi - lo <= options.x_tolerance * (F::one() + mid.abs())
        {
            return Some(Root { x: mid, residual: f_mid, iterations: iterations + 1 });
        }
        if (f_mid < F::zero()) == (f_lo < F::zero()) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    None
}
