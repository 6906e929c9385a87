//! Core types for vertical free-fall simulation.
//!
//! This crate defines the pieces that solvers and transport layers build on:
//!
//! - [`Parameters`]: immutable, validated physical inputs of a run
//! - [`State`]: one `(time, height, velocity)` sample of a trajectory
//! - [`validate`]: turns loosely typed [`RawInputs`] into [`Parameters`] or a
//!   [`ValidationError`]
//! - [`Solver`]: a trajectory strategy mapping parameters to samples
//! - [`Observer`]: receives solver events and optionally returns actions
//!
//! Quantities use [`uom`] SI types; `*_si` helpers accept or return plain
//! `f64` values in m, s, m/s and m/s².

pub mod constraint;

mod observer;
mod parameters;
mod solver;
mod state;
mod validate;

pub use observer::Observer;
pub use parameters::Parameters;
pub use solver::Solver;
pub use state::State;
pub use validate::{
    Direction, ParseDirectionError, RawInputs, RawValue, ValidationError, validate,
};
