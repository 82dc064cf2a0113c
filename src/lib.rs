//! Mass-spring rope simulation with analytical cross-checks.
//!
//! `ropesim` lays a chain of point masses and Hooke springs along a
//! parametric curve, advances it with a fixed-step RK4 integrator, and
//! compares the settled shape against the inextensible catenary and the
//! elastic cable obtained by root finding.
//!
//! # Features
//!
//! - **Rope builder**: any arc-length curve (`Line`, `UCurve`, or your own)
//! - **Force model**: Hooke springs, relative-velocity damping, gravity, tension
//! - **RK4 integrator**: all nodes advance through each stage together
//! - **Analytical references**: catenary and elastic cable profiles
//! - **Observable**: monitor RK4 stages via the `StepObserver` trait
//! - **`no_std` compatible**: only needs `alloc`
//!
//! ```
//! use ropesim::{CreateConfig, ElementConfig, Line, Rope, RopeSolver, SolverConfig, Vec2};
//!
//! let line = Line::new(Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0))?;
//! let element = ElementConfig::new(100.0, 0.1, 0.01).with_damping(0.05);
//! let rope = Rope::build(&line, &element, &CreateConfig::new())?;
//! let mut solver = RopeSolver::new(rope, SolverConfig::new().with_gravity(Vec2::new(0.0, -9.8)));
//! for _ in 0..10 {
//!     solver.update(1e-3)?;
//! }
//! assert_eq!(solver.tensions().len(), solver.rope().num_points());
//! # Ok::<(), ropesim::RopeError>(())
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod element;
pub mod curve;
pub mod config;
pub mod rope;
pub mod force;
pub mod solver;
pub mod roots;
pub mod analytical;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use element::{Point, PointId, Side, Spring, SpringId};
pub use curve::{Curve, Line, UCurve};
pub use config::{CreateConfig, ElasticRopeConfig, ElementConfig, ElementSizing, RopeConfig, SolverConfig};
pub use rope::Rope;
pub use force::{energy, point_acceleration, spring_forces, PointAcceleration, SpringForces};
pub use solver::RopeSolver;
pub use analytical::{solve_catenary, solve_elastic_rope, Catenary, SampledCurve};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::RopeError;
