//! Vertical free-fall simulation.
//!
//! [`Simulation::run`] validates raw input, integrates the trajectory with a
//! [`Solver`] (Euler-Cromer by default), and returns a [`SimulationResult`]
//! holding the governing equation label and the ordered samples.
//!
//! ```
//! use freefall::{RawInputs, Simulation};
//!
//! let raw = RawInputs::default()
//!     .with_gravity(1.0)
//!     .with_initial_height(2.0)
//!     .with_initial_velocity(0.0)
//!     .with_velocity_direction("down")
//!     .with_time_step(1.0);
//!
//! let result = Simulation::new().run(&raw).unwrap();
//! assert_eq!(result.equation, "h''(t) = -g");
//! assert_eq!(result.states.len(), 3);
//! ```
//!
//! The [`view`] module turns samples into rounded table rows, chart series,
//! and CSV/JSON output for presentation layers.

mod simulation;
pub mod view;

pub use freefall_core::{
    Direction, Parameters, RawInputs, RawValue, Solver, State, ValidationError, validate,
};
pub use freefall_solvers::EulerCromer;
pub use simulation::{EQUATION, RunError, Simulation, SimulationResult};
