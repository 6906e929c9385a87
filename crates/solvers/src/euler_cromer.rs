//! Semi-implicit (Euler-Cromer) solver for vertical free fall.
//!
//! Each step updates velocity from the constant acceleration first and then
//! advances height with the *updated* velocity:
//!
//! ```text
//! v_{n+1} = v_n - g * dt
//! h_{n+1} = h_n + v_{n+1} * dt
//! t_{n+1} = t_n + dt
//! ```
//!
//! Integration stops at the first sample whose height reaches zero. A height
//! that would go below ground is clamped to exactly zero; velocity is left as
//! computed.
//!
//! # Example
//!
//! ```
//! use freefall_core::Parameters;
//! use freefall_solvers::euler_cromer;
//!
//! let parameters = Parameters::from_si(1.0, 2.0, 0.0, 1.0).unwrap();
//! let solution = euler_cromer::solve_unobserved(&parameters);
//!
//! let heights: Vec<f64> = solution.states.iter().map(|s| s.height_si()).collect();
//! assert_eq!(heights, vec![2.0, 1.0, 0.0]);
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use freefall_core::{Observer, Parameters, Solver, State};
use tracing::trace;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Length, Time},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

/// Upper bound on the samples reserved up front.
const MAX_PREALLOCATED: usize = 1 << 16;

/// The Euler-Cromer trajectory strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EulerCromer;

impl Solver for EulerCromer {
    fn solve(&self, parameters: &Parameters) -> Vec<State> {
        solve_unobserved(parameters).states
    }
}

/// Integrates the trajectory until the object reaches the ground.
///
/// # Algorithm
///
/// 1. Emit the release state at `t = 0`, even if it is already on the ground.
/// 2. While the current height is above zero:
///    - Update velocity: `v += -g * dt`.
///    - Update height with the new velocity: `h += v * dt`.
///    - Advance time: `t += dt`.
///    - Clamp a negative height to zero.
///    - Emit the sample.
/// 3. Return the samples.
///
/// Termination needs no iteration cap: velocity falls by `g * dt > 0` every
/// step, so the height always crosses zero after finitely many steps.
///
/// # Observer
///
/// The observer receives an [`Event`] for every emitted sample, including the
/// release state, and may return [`Action::StopEarly`] to end the run before
/// ground contact.
pub fn solve<Obs>(parameters: &Parameters, mut observer: Obs) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let acceleration = -parameters.gravity();
    let dt = parameters.time_step();
    let ground = Length::new::<meter>(0.0);

    let mut time = Time::new::<second>(0.0);
    let mut height = parameters.initial_height();
    let mut velocity = parameters.initial_velocity();

    let mut states = Vec::with_capacity(capacity_hint(parameters));

    let release = State::new(time, height, velocity);
    if emit(&mut states, &mut observer, 0, release) {
        return Solution {
            status: Status::StoppedByObserver,
            states,
            steps: 0,
        };
    }

    let mut steps = 0;
    while height > ground {
        velocity = velocity + acceleration * dt;
        height = height + velocity * dt;
        time = time + dt;
        steps += 1;

        if height < ground {
            height = ground;
        }

        let state = State::new(time, height, velocity);
        trace!(
            step = steps,
            time = state.time_si(),
            height = state.height_si(),
            velocity = state.velocity_si(),
            "euler-cromer step"
        );

        if emit(&mut states, &mut observer, steps, state) {
            return Solution {
                status: Status::StoppedByObserver,
                states,
                steps,
            };
        }
    }

    Solution {
        status: Status::Grounded,
        states,
        steps,
    }
}

/// Integrates the trajectory without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events, so the
/// returned solution always has [`Status::Grounded`].
#[must_use]
pub fn solve_unobserved(parameters: &Parameters) -> Solution {
    solve(parameters, ())
}

/// Records a sample and reports whether the observer asked to stop.
fn emit<Obs>(states: &mut Vec<State>, observer: &mut Obs, step: usize, state: State) -> bool
where
    Obs: Observer<Event, Action>,
{
    states.push(state);
    matches!(
        observer.observe(&Event { step, state }),
        Some(Action::StopEarly)
    )
}

/// Number of steps the continuous motion needs to reach the ground.
///
/// This is `ceil(t_flight / dt)` with the closed-form time of flight
/// `(v + sqrt(v² + 2gh)) / g`. It returns `None` when that value is not finite,
/// for example when `v²` overflows, and saturates at `usize::MAX`.
///
/// The estimate is a sizing aid, not a bound: when `g * dt` underflows to
/// zero the discrete scheme stops losing velocity and may never land even
/// though the estimate is finite.
#[must_use]
pub fn estimated_steps(parameters: &Parameters) -> Option<usize> {
    let g = parameters.gravity().get::<meter_per_second_squared>();
    let h = parameters.initial_height().get::<meter>();
    let v = parameters.initial_velocity().get::<meter_per_second>();
    let dt = parameters.time_step().get::<second>();

    let flight_time = (v + (v * v + 2.0 * g * h).sqrt()) / g;
    let steps = (flight_time / dt).ceil();

    if steps.is_finite() && steps >= 0.0 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = steps as usize;
        Some(steps)
    } else {
        None
    }
}

/// Samples to reserve up front: the estimate plus the release and landing
/// samples, capped at [`MAX_PREALLOCATED`].
fn capacity_hint(parameters: &Parameters) -> usize {
    estimated_steps(parameters).map_or(1, |steps| {
        steps.saturating_add(2).min(MAX_PREALLOCATED)
    })
}
