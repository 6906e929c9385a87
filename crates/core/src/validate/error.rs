use thiserror::Error;

const GRAVITY: &str = "Gravity must be a positive number.";
const HEIGHT: &str = "Height must be a number greater than or equal to 0.";
const INITIAL_VELOCITY: &str = "Initial velocity must be a number greater than or equal to 0.";
const TIME_STEP: &str = "Time step must be a positive number.";
const DIRECTION: &str = "Velocity direction must be either up or down.";

/// The reason raw simulation input was rejected.
///
/// Each variant corresponds to one validation rule, and its `Display` output
/// is the user-facing message for that rule. Transport layers should show
/// that text as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("{}", GRAVITY)]
    Gravity,

    #[error("{}", HEIGHT)]
    Height,

    #[error("{}", INITIAL_VELOCITY)]
    InitialVelocity,

    #[error("{}", TIME_STEP)]
    TimeStep,

    #[error("{}", DIRECTION)]
    Direction,
}

impl ValidationError {
    /// The user-facing message, identical to the `Display` output.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Gravity => GRAVITY,
            Self::Height => HEIGHT,
            Self::InitialVelocity => INITIAL_VELOCITY,
            Self::TimeStep => TIME_STEP,
            Self::Direction => DIRECTION,
        }
    }

    /// The raw input field that failed, using its wire name.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Gravity => "gravity",
            Self::Height => "initialHeight",
            Self::InitialVelocity => "initialVelocity",
            Self::TimeStep => "timeStep",
            Self::Direction => "velocityDirection",
        }
    }
}
