use freefall_core::{Parameters, RawInputs, Solver, State, ValidationError, validate};
use freefall_solvers::{
    EulerCromer,
    euler_cromer::{self, Action, Event, Status},
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// The governing law of every run, `h''(t) = -g`.
pub const EQUATION: &str = "h''(t) = -g";

/// The outcome of a successful run.
///
/// Serializes as `{ "equation": "h''(t) = -g", "states": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Label of the governing equation; always [`EQUATION`].
    pub equation: &'static str,

    /// Samples in chronological order, starting with the release state.
    pub states: Vec<State>,
}

/// Why a bounded run produced no trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The input broke a validation rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Reaching the ground would take more than `limit` steps, or never
    /// happens in floating point.
    #[error("Simulation would need more than {limit} steps.")]
    TooManySteps { limit: usize },
}

/// Entry point composing validation and a trajectory solver.
///
/// Each call to [`Simulation::run`] is independent: no state is kept between
/// runs, so one `Simulation` can be shared freely across callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulation<S = EulerCromer> {
    solver: S,
}

impl Simulation {
    /// Creates a simulation backed by the [`EulerCromer`] solver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            solver: EulerCromer,
        }
    }

    /// Like [`Simulation::run`], but gives up on runs longer than `max_steps`.
    ///
    /// A run is refused before integrating when the closed-form step estimate
    /// is not finite or exceeds the limit. Integration is also stopped once it
    /// passes the limit, which catches inputs whose `g * dt` underflows and
    /// would otherwise never land.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Invalid`] for input that fails validation and
    /// [`RunError::TooManySteps`] for runs over the limit.
    pub fn run_bounded(
        &self,
        raw: &RawInputs,
        max_steps: usize,
    ) -> Result<SimulationResult, RunError> {
        let parameters = checked(raw)?;
        let too_long = RunError::TooManySteps { limit: max_steps };

        let estimate = euler_cromer::estimated_steps(&parameters);
        if estimate.is_none_or(|steps| steps > max_steps) {
            debug!(?estimate, max_steps, "refused simulation over the step limit");
            return Err(too_long);
        }

        let solution = euler_cromer::solve(&parameters, |event: &Event| {
            (event.step > max_steps).then_some(Action::StopEarly)
        });

        match solution.status {
            Status::Grounded => {
                debug!(samples = solution.states.len(), "simulation complete");
                Ok(SimulationResult {
                    equation: EQUATION,
                    states: solution.states,
                })
            }
            Status::StoppedByObserver => {
                debug!(max_steps, "stopped simulation at the step limit");
                Err(too_long)
            }
        }
    }
}

impl<S: Solver> Simulation<S> {
    /// Creates a simulation backed by a custom trajectory strategy.
    #[must_use]
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// Validates `raw` and integrates the resulting trajectory.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the first rule the input breaks.
    /// No partial result is produced.
    pub fn run(&self, raw: &RawInputs) -> Result<SimulationResult, ValidationError> {
        let parameters = checked(raw)?;

        let states = self.solver.solve(&parameters);
        debug!(samples = states.len(), "simulation complete");

        Ok(SimulationResult {
            equation: EQUATION,
            states,
        })
    }
}

fn checked(raw: &RawInputs) -> Result<Parameters, ValidationError> {
    validate(raw).inspect_err(|error| {
        debug!(field = error.field(), %error, "rejected simulation input");
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use freefall_core::Parameters;
    use uom::si::velocity::meter_per_second;

    use super::*;

    /// Records the parameters it receives and returns no samples.
    #[derive(Default)]
    struct RecordingSolver {
        received: RefCell<Vec<Parameters>>,
    }

    impl Solver for RecordingSolver {
        fn solve(&self, parameters: &Parameters) -> Vec<State> {
            self.received.borrow_mut().push(*parameters);
            Vec::new()
        }
    }

    fn raw(direction: &str) -> RawInputs {
        RawInputs::default()
            .with_gravity(9.81)
            .with_initial_height(10.0)
            .with_initial_velocity(5.0)
            .with_velocity_direction(direction)
            .with_time_step(0.1)
    }

    #[test]
    fn returns_equation_and_states() {
        let result = Simulation::new()
            .run(&RawInputs::standard())
            .expect("standard inputs are valid");

        assert_eq!(result.equation, "h''(t) = -g");
        assert!(!result.states.is_empty());
        assert_eq!(result.states[0], State::from_si(0.0, 100.0, -0.0));
    }

    #[test]
    fn signs_initial_velocity_from_direction() {
        let recorder = RecordingSolver::default();
        let simulation = Simulation::with_solver(&recorder);

        simulation.run(&raw("down")).unwrap();
        simulation.run(&raw("up")).unwrap();

        let received = recorder.received.borrow();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].initial_velocity().get::<meter_per_second>(), -5.0);
        assert_eq!(received[1].initial_velocity().get::<meter_per_second>(), 5.0);
    }

    #[test]
    fn solver_output_is_passed_through() {
        let recorder = RecordingSolver::default();
        let result = Simulation::with_solver(&recorder).run(&raw("down")).unwrap();

        assert_eq!(result.equation, EQUATION);
        assert!(result.states.is_empty());
    }

    #[test]
    fn invalid_input_never_reaches_the_solver() {
        let recorder = RecordingSolver::default();
        let error = Simulation::with_solver(&recorder)
            .run(&raw("sideways"))
            .unwrap_err();

        assert_eq!(error, ValidationError::Direction);
        assert!(recorder.received.borrow().is_empty());
    }

    fn text_inputs(gravity: &str, height: &str, time_step: &str) -> RawInputs {
        RawInputs::default()
            .with_gravity(gravity)
            .with_initial_height(height)
            .with_initial_velocity("0")
            .with_velocity_direction("down")
            .with_time_step(time_step)
    }

    #[test]
    fn bounded_run_matches_unbounded_within_the_limit() {
        let simulation = Simulation::new();
        let raw = text_inputs("1", "2", "1");

        assert_eq!(
            simulation.run_bounded(&raw, 2),
            simulation.run(&raw).map_err(RunError::from)
        );
        assert_eq!(
            simulation.run_bounded(&raw, 1),
            Err(RunError::TooManySteps { limit: 1 })
        );
    }

    #[test]
    fn bounded_run_refuses_underflowing_gravity_step() {
        let raw = text_inputs("1e-200", "1", "1e-200");
        assert!(validate(&raw).is_ok());

        assert_eq!(
            Simulation::new().run_bounded(&raw, 1_000_000),
            Err(RunError::TooManySteps { limit: 1_000_000 })
        );
    }

    #[test]
    fn bounded_run_stops_a_run_that_never_lands() {
        // The closed form estimates zero steps, yet velocity never changes.
        let raw = text_inputs("5e-324", "5e-324", "0.25");

        assert_eq!(
            Simulation::new().run_bounded(&raw, 1000),
            Err(RunError::TooManySteps { limit: 1000 })
        );
    }

    #[test]
    fn bounded_run_reports_validation_messages_verbatim() {
        let error = Simulation::new()
            .run_bounded(&raw("sideways"), 1000)
            .unwrap_err();

        assert_eq!(error, RunError::Invalid(ValidationError::Direction));
        assert_eq!(
            error.to_string(),
            "Velocity direction must be either up or down."
        );
    }

    #[test]
    fn serializes_result_as_json() {
        let result = SimulationResult {
            equation: EQUATION,
            states: vec![State::from_si(0.0, 2.0, 0.0), State::from_si(1.0, 1.0, -1.0)],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "equation": "h''(t) = -g",
                "states": [
                    { "time": 0.0, "height": 2.0, "velocity": 0.0 },
                    { "time": 1.0, "height": 1.0, "velocity": -1.0 },
                ],
            })
        );
    }
}
