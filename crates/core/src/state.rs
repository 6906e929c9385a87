use serde::Serialize;
use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

/// One sample of a free-fall trajectory.
///
/// Serializes as `{ "time": s, "height": m, "velocity": m/s }` in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct State {
    pub time: Time,
    pub height: Length,
    pub velocity: Velocity,
}

impl State {
    /// Creates a state from unit-safe quantities.
    #[must_use]
    pub fn new(time: Time, height: Length, velocity: Velocity) -> Self {
        Self {
            time,
            height,
            velocity,
        }
    }

    /// Creates a state from SI values (s, m, m/s).
    #[must_use]
    pub fn from_si(time: f64, height: f64, velocity: f64) -> Self {
        Self::new(
            Time::new::<second>(time),
            Length::new::<meter>(height),
            Velocity::new::<meter_per_second>(velocity),
        )
    }

    /// Elapsed time since release, in seconds.
    #[must_use]
    pub fn time_si(&self) -> f64 {
        self.time.get::<second>()
    }

    /// Height above the ground, in meters.
    #[must_use]
    pub fn height_si(&self) -> f64 {
        self.height.get::<meter>()
    }

    /// Signed velocity, in meters per second (positive upward).
    #[must_use]
    pub fn velocity_si(&self) -> f64 {
        self.velocity.get::<meter_per_second>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_constructor_values() {
        let state = State::from_si(1.2, 50.5, -3.1);

        assert_eq!(state.time_si(), 1.2);
        assert_eq!(state.height_si(), 50.5);
        assert_eq!(state.velocity_si(), -3.1);
    }

    #[test]
    fn serializes_as_plain_triple() {
        let json = serde_json::to_string(&State::from_si(0.0, 2.0, -1.5)).unwrap();
        assert_eq!(json, r#"{"time":0.0,"height":2.0,"velocity":-1.5}"#);
    }
}
