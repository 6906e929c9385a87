//! Trajectory solvers for vertical free fall.
//!
//! - [`euler_cromer`]: semi-implicit Euler that updates velocity first and
//!   then position with the new velocity, stopping at ground contact.
//!
//! [`EulerCromer`] implements [`freefall_core::Solver`] for use wherever a
//! trajectory strategy is expected.

pub mod euler_cromer;

pub use euler_cromer::EulerCromer;
