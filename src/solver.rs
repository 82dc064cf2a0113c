//! Fixed-step RK4 integrator for a [`Rope`].
//!
//! Spring forces couple every node to its neighbors, so each RK4 stage is
//! evaluated for all nodes before any node moves to the next stage's trial
//! state. Advancing one node through all four stages while its neighbors
//! sit at a stale state gives a different (uncoupled) scheme.

use crate::analytical::{self, Catenary, SampledCurve};
use crate::config::{ElasticRopeConfig, SolverConfig};
use crate::element::{PointId, Side};
use crate::error::RopeError;
use crate::float::Float;
use crate::force::{self, point_acceleration};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::rope::Rope;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// Trial-state factors applied after stages 0, 1 and 2.
const STAGE_FACTORS: [f64; 3] = [0.5, 0.5, 1.0];

/// Per-step buffers, reused across steps.
#[derive(Clone, Debug)]
struct Rk4Scratch<V: Vec> {
    pos0: AllocVec<V>,
    vel0: AllocVec<V>,
    /// Velocity at each stage's trial state.
    k1: [AllocVec<V>; 4],
    /// Acceleration at each stage's trial state.
    k2: [AllocVec<V>; 4],
    tensions: AllocVec<V::Scalar>,
}

impl<V: Vec> Rk4Scratch<V> {
    fn new(n: usize) -> Self {
        Rk4Scratch {
            pos0: alloc::vec![V::zero(); n],
            vel0: alloc::vec![V::zero(); n],
            k1: core::array::from_fn(|_| alloc::vec![V::zero(); n]),
            k2: core::array::from_fn(|_| alloc::vec![V::zero(); n]),
            tensions: alloc::vec![V::Scalar::zero(); n],
        }
    }
}

/// Advances a rope with synchronized RK4 and records per-node tension.
#[derive(Clone, Debug)]
pub struct RopeSolver<V: Vec> {
    rope: Rope<V>,
    config: SolverConfig<V>,
    tensions: AllocVec<V::Scalar>,
    scratch: Rk4Scratch<V>,
}

impl<V: Vec> RopeSolver<V> {
    pub fn new(rope: Rope<V>, config: SolverConfig<V>) -> Self {
        let n = rope.num_points();
        RopeSolver {
            rope,
            config,
            tensions: alloc::vec![V::Scalar::zero(); n],
            scratch: Rk4Scratch::new(n),
        }
    }

    /// Advance every free node by one RK4 step of `dt`.
    pub fn update(&mut self, dt: V::Scalar) -> Result<(), RopeError> {
        self.step(dt, &mut NoOpStepObserver)
    }

    /// [`update`](Self::update) with progress reported to `observer`.
    ///
    /// Either the whole step is committed or, on error, every node is put
    /// back where it was and the tensions are left untouched.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) -> Result<(), RopeError> {
        if !(dt > V::Scalar::zero()) || !dt.is_finite() {
            return Err(RopeError::InvalidConfiguration("time step must be positive"));
        }

        for (i, p) in self.rope.points().iter().enumerate() {
            self.scratch.pos0[i] = p.pos;
            self.scratch.vel0[i] = p.vel;
        }

        if let Err(err) = self.evaluate_stages(dt, observer) {
            let scratch = &self.scratch;
            for (i, p) in self.rope.points_mut().iter_mut().enumerate() {
                p.pos = scratch.pos0[i];
                p.vel = scratch.vel0[i];
            }
            log::warn!("rk4 step aborted, rope rolled back: {}", err);
            observer.on_step_aborted(&err);
            return Err(err);
        }

        let sixth = dt / V::Scalar::from_f64(6.0);
        let two = V::Scalar::two();
        let scratch = &self.scratch;
        for (i, p) in self.rope.points_mut().iter_mut().enumerate() {
            if p.fixed {
                continue;
            }
            let (k1, k2) = (&scratch.k1, &scratch.k2);
            let dx = k1[0][i] + (k1[1][i] + k1[2][i]).scale(two) + k1[3][i];
            let dv = k2[0][i] + (k2[1][i] + k2[2][i]).scale(two) + k2[3][i];
            p.pos = scratch.pos0[i] + dx.scale(sixth);
            p.vel = scratch.vel0[i] + dv.scale(sixth);
        }
        self.tensions.copy_from_slice(&scratch.tensions);

        observer.on_step_complete();
        Ok(())
    }

    /// Fill `k1`/`k2` for all four stages, moving free nodes to each trial
    /// state in lockstep. Tension is sampled at stage 0 only.
    fn evaluate_stages<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) -> Result<(), RopeError> {
        let RopeSolver { rope, config, scratch, .. } = self;
        let n = rope.num_points();

        for stage in 0..4 {
            for i in 0..n {
                let fixed = rope.point(i).fixed;
                if fixed && stage > 0 {
                    continue;
                }
                let eval = point_acceleration(rope, PointId(i), config.gravity)?;
                if stage == 0 {
                    scratch.tensions[i] = eval.tension;
                }
                if fixed {
                    scratch.k1[stage][i] = V::zero();
                    scratch.k2[stage][i] = V::zero();
                } else {
                    scratch.k1[stage][i] = rope.point(i).vel;
                    scratch.k2[stage][i] = eval.acceleration;
                }
            }
            observer.on_stage(stage);

            if let Some(&factor) = STAGE_FACTORS.get(stage) {
                let h = dt * V::Scalar::from_f64(factor);
                for (i, p) in rope.points_mut().iter_mut().enumerate() {
                    if p.fixed {
                        continue;
                    }
                    p.pos = scratch.pos0[i] + scratch.k1[stage][i].scale(h);
                    p.vel = scratch.vel0[i] + scratch.k2[stage][i].scale(h);
                }
            }
        }
        Ok(())
    }

    pub fn rope(&self) -> &Rope<V> {
        &self.rope
    }

    /// Mutable access for setting initial conditions between steps.
    pub fn rope_mut(&mut self) -> &mut Rope<V> {
        &mut self.rope
    }

    pub fn config(&self) -> &SolverConfig<V> {
        &self.config
    }

    /// Largest single-spring force magnitude per node, sampled at the start
    /// of the last committed step.
    pub fn tensions(&self) -> &[V::Scalar] {
        &self.tensions
    }

    /// See [`force::energy`].
    pub fn energy(&self) -> V::Scalar {
        force::energy(&self.rope, self.config.gravity)
    }
}

impl<F: Float> RopeSolver<Vec2<F>> {
    /// Horizontal distance from the first node to the last.
    pub fn span(&self) -> F {
        let points = self.rope.points();
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => (last.pos.x - first.pos.x).abs(),
            _ => F::zero(),
        }
    }

    /// Depth of the lowest node below the first node.
    pub fn sag(&self) -> F {
        let points = self.rope.points();
        let Some(first) = points.first() else {
            return F::zero();
        };
        points
            .iter()
            .fold(F::zero(), |deepest, p| deepest.max(first.pos.y - p.pos.y))
    }

    /// Inextensible catenary with the rope's current span and sag.
    pub fn catenary_reference(&self) -> Result<Catenary<F>, RopeError> {
        analytical::solve_catenary(self.span() * F::half(), self.sag())
    }

    /// Horizontal component of the force the first spring exerts on the
    /// first node.
    pub fn horizontal_tension(&self) -> Result<F, RopeError> {
        if self.rope.num_points() == 0 {
            return Err(RopeError::InvalidConfiguration("rope has no points"));
        }
        let forces = force::spring_forces(&self.rope, PointId(0), &[Side::Right])?;
        Ok(forces.elastic.x)
    }

    /// Elastic cable with the rope's current span and horizontal tension.
    pub fn elastic_reference(&self, cable: &ElasticRopeConfig<F>) -> Result<SampledCurve<F>, RopeError> {
        analytical::solve_elastic_rope_with_samples(
            self.horizontal_tension()?,
            self.span(),
            cable,
            analytical::DEFAULT_SAMPLES,
        )
    }
}
