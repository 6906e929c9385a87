use serde::Serialize;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Time, Velocity},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

use crate::constraint::{Constrained, ConstraintError, Finite, NonNegative, StrictlyPositive};

/// Validated physical parameters of a single free-fall run.
///
/// A `Parameters` value can only be built from constrained inputs, so every
/// instance already satisfies:
///
/// - `gravity` is finite and strictly positive,
/// - `initial_height` is finite and non-negative,
/// - `initial_velocity` is finite (positive is upward),
/// - `time_step` is finite and strictly positive.
///
/// These guarantees are what make every trajectory finite: velocity drops by
/// `gravity * time_step` each step, so the height must eventually reach zero.
///
/// The fields are private and there are no setters; a `Parameters` never
/// changes after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    gravity: Acceleration,
    initial_height: Length,
    initial_velocity: Velocity,
    time_step: Time,
}

impl Parameters {
    /// Creates parameters from already constrained SI values.
    ///
    /// - `gravity` in m/s² (magnitude of the downward acceleration)
    /// - `initial_height` in m
    /// - `initial_velocity` in m/s, positive upward
    /// - `time_step` in s
    #[must_use]
    pub fn new(
        gravity: Constrained<f64, StrictlyPositive>,
        initial_height: Constrained<f64, NonNegative>,
        initial_velocity: Constrained<f64, Finite>,
        time_step: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self {
            gravity: Acceleration::new::<meter_per_second_squared>(gravity.into_inner()),
            initial_height: Length::new::<meter>(initial_height.into_inner()),
            initial_velocity: Velocity::new::<meter_per_second>(initial_velocity.into_inner()),
            time_step: Time::new::<second>(time_step.into_inner()),
        }
    }

    /// Creates parameters from raw SI values, checking each constraint.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] of the first value, in argument order,
    /// that violates its constraint.
    pub fn from_si(
        gravity: f64,
        initial_height: f64,
        initial_velocity: f64,
        time_step: f64,
    ) -> Result<Self, ConstraintError> {
        Ok(Self::new(
            StrictlyPositive::new(gravity)?,
            NonNegative::new(initial_height)?,
            Finite::new(initial_velocity)?,
            StrictlyPositive::new(time_step)?,
        ))
    }

    /// Magnitude of the constant downward acceleration.
    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    /// Release height above the ground.
    #[must_use]
    pub fn initial_height(&self) -> Length {
        self.initial_height
    }

    /// Signed release velocity, positive upward.
    #[must_use]
    pub fn initial_velocity(&self) -> Velocity {
        self.initial_velocity
    }

    /// Fixed integration increment.
    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn stores_constructor_values() {
        let parameters = Parameters::from_si(9.81, 100.0, -5.0, 0.1).unwrap();

        assert_relative_eq!(parameters.gravity().get::<meter_per_second_squared>(), 9.81);
        assert_relative_eq!(parameters.initial_height().get::<meter>(), 100.0);
        assert_relative_eq!(parameters.initial_velocity().get::<meter_per_second>(), -5.0);
        assert_relative_eq!(parameters.time_step().get::<second>(), 0.1);
    }

    #[test]
    fn from_si_rejects_invalid_values() {
        assert_eq!(
            Parameters::from_si(0.0, 1.0, 0.0, 0.1),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            Parameters::from_si(9.81, -1.0, 0.0, 0.1),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            Parameters::from_si(9.81, 1.0, f64::INFINITY, 0.1),
            Err(ConstraintError::NotFinite)
        );
        assert_eq!(
            Parameters::from_si(9.81, 1.0, 0.0, -0.1),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn serializes_in_si_units() {
        let parameters = Parameters::from_si(1.0, 2.0, -3.0, 0.5).unwrap();
        let json = serde_json::to_value(parameters).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "gravity": 1.0,
                "initialHeight": 2.0,
                "initialVelocity": -3.0,
                "timeStep": 0.5,
            })
        );
    }
}
