//! Conversion of raw, loosely typed input into [`Parameters`].
//!
//! Rules are checked in a fixed order and the first failure is returned:
//!
//! 1. gravity is a finite number greater than zero,
//! 2. initial height is a finite number of at least zero,
//! 3. initial speed is a finite number of at least zero,
//! 4. time step is a finite number greater than zero,
//! 5. velocity direction is exactly `"up"` or `"down"`.

mod direction;
mod error;
mod raw;

pub use direction::{Direction, ParseDirectionError};
pub use error::ValidationError;
pub use raw::{RawInputs, RawValue};

use crate::{
    Parameters,
    constraint::{NonNegative, StrictlyPositive},
};

/// Validates raw input and builds the corresponding [`Parameters`].
///
/// The initial velocity field is a magnitude; its sign comes from the
/// direction (`"up"` positive, `"down"` negative).
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first rule that fails.
pub fn validate(raw: &RawInputs) -> Result<Parameters, ValidationError> {
    let gravity = StrictlyPositive::new(coerce(raw.gravity.as_ref()))
        .map_err(|_| ValidationError::Gravity)?;

    let initial_height = NonNegative::new(coerce(raw.initial_height.as_ref()))
        .map_err(|_| ValidationError::Height)?;

    let speed = NonNegative::new(coerce(raw.initial_velocity.as_ref()))
        .map_err(|_| ValidationError::InitialVelocity)?;

    let time_step = StrictlyPositive::new(coerce(raw.time_step.as_ref()))
        .map_err(|_| ValidationError::TimeStep)?;

    let direction = direction(raw.velocity_direction.as_ref()).ok_or(ValidationError::Direction)?;

    Ok(Parameters::new(
        gravity,
        initial_height,
        direction.apply(speed),
        time_step,
    ))
}

/// Missing values coerce to NaN so they fail every numeric rule.
fn coerce(value: Option<&RawValue>) -> f64 {
    value.map_or(f64::NAN, RawValue::to_number)
}

fn direction(value: Option<&RawValue>) -> Option<Direction> {
    value?.as_text()?.parse().ok()
}
