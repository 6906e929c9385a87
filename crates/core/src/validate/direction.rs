use std::{fmt, str::FromStr};

use crate::constraint::{Constrained, Finite, NonNegative};

/// Direction of the release velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Returned when text is not exactly `"up"` or `"down"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown velocity direction {0:?}")]
pub struct ParseDirectionError(String);

impl Direction {
    /// The token used for this direction on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Signs a speed: `+speed` upward, `-speed` downward.
    #[must_use]
    pub fn apply(self, speed: Constrained<f64, NonNegative>) -> Constrained<f64, Finite> {
        let speed = speed.into_inner();
        match self {
            Self::Up => Constrained::new_unchecked(speed),
            Self::Down => Constrained::new_unchecked(-speed),
        }
    }
}

/// Parses the exact tokens `"up"` and `"down"`, without trimming or case folding.
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(ParseDirectionError(other.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
