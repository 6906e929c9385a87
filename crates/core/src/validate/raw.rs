use serde::{Deserialize, Serialize};

use super::Direction;

/// A loosely typed input value as it arrives from a form, file, or request.
///
/// Deserialization is untagged, so `9.81`, `"9.81"` and `true` are all
/// accepted; numeric meaning is decided later by [`RawValue::to_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl RawValue {
    /// Coerces the value to a number.
    ///
    /// - numbers pass through unchanged,
    /// - booleans become `1` or `0`,
    /// - text is trimmed, blank text becomes `0`, `0x`/`0o`/`0b` prefixed
    ///   integers are read in their radix, and anything else that is not a
    ///   decimal float literal becomes NaN.
    ///
    /// The result may be NaN or infinite; range checks happen in validation.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Bool(flag) => f64::from(u8::from(*flag)),
            Self::Text(text) => parse_text(text.trim()),
        }
    }

    /// Returns the text if this value is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Bool(_) => None,
        }
    }
}

fn parse_text(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    radix_literal(text)
        .or_else(|| text.parse().ok())
        .unwrap_or(f64::NAN)
}

/// Reads an unsigned `0x`, `0o` or `0b` integer literal.
///
/// Returns `None` when `text` has no such prefix, and NaN when the prefix is
/// followed by no digits or by a digit outside the radix.
fn radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0, |value: f64, c| {
        c.to_digit(radix)
            .map(|digit| value * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Direction> for RawValue {
    fn from(value: Direction) -> Self {
        Self::Text(value.as_str().to_owned())
    }
}

/// Unvalidated simulation inputs.
///
/// Field names on the wire are `gravity`, `initialHeight`, `initialVelocity`
/// (a non-negative magnitude), `velocityDirection` and `timeStep`. Any field
/// may be absent; a missing or `null` field never coerces to a valid number.
///
/// # Example
///
/// ```
/// use freefall_core::{RawInputs, validate};
///
/// let raw = RawInputs::default()
///     .with_gravity("9.81")
///     .with_initial_height(10.0)
///     .with_initial_velocity("0")
///     .with_velocity_direction("down")
///     .with_time_step(0.1);
///
/// assert!(validate(&raw).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_height: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_velocity: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity_direction: Option<RawValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_step: Option<RawValue>,
}

impl RawInputs {
    /// A standard-gravity drop from 100 m at rest, sampled every 0.1 s.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
            .with_gravity(9.81)
            .with_initial_height(100.0)
            .with_initial_velocity(0.0)
            .with_velocity_direction(Direction::Down)
            .with_time_step(0.1)
    }

    /// Sets the gravity field.
    #[must_use]
    pub fn with_gravity(mut self, value: impl Into<RawValue>) -> Self {
        self.gravity = Some(value.into());
        self
    }

    /// Sets the initial height field.
    #[must_use]
    pub fn with_initial_height(mut self, value: impl Into<RawValue>) -> Self {
        self.initial_height = Some(value.into());
        self
    }

    /// Sets the initial speed field (a magnitude; see `velocity_direction`).
    #[must_use]
    pub fn with_initial_velocity(mut self, value: impl Into<RawValue>) -> Self {
        self.initial_velocity = Some(value.into());
        self
    }

    /// Sets the velocity direction field.
    #[must_use]
    pub fn with_velocity_direction(mut self, value: impl Into<RawValue>) -> Self {
        self.velocity_direction = Some(value.into());
        self
    }

    /// Sets the time step field.
    #[must_use]
    pub fn with_time_step(mut self, value: impl Into<RawValue>) -> Self {
        self.time_step = Some(value.into());
        self
    }

    /// Layers `other` on top of `self`: fields present in `other` win.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            gravity: other.gravity.or(self.gravity),
            initial_height: other.initial_height.or(self.initial_height),
            initial_velocity: other.initial_velocity.or(self.initial_velocity),
            velocity_direction: other.velocity_direction.or(self.velocity_direction),
            time_step: other.time_step.or(self.time_step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_text() {
        assert_eq!(RawValue::from("  9.81 ").to_number(), 9.81);
        assert_eq!(RawValue::from("1e3").to_number(), 1000.0);
        assert_eq!(RawValue::from(".5").to_number(), 0.5);
        assert_eq!(RawValue::from("").to_number(), 0.0);
        assert_eq!(RawValue::from("   ").to_number(), 0.0);
        assert!(RawValue::from("abc").to_number().is_nan());
        assert!(RawValue::from("12m").to_number().is_nan());
        assert!(RawValue::from("inf").to_number().is_infinite());
    }

    #[test]
    fn coerces_prefixed_integers() {
        assert_eq!(RawValue::from("0x10").to_number(), 16.0);
        assert_eq!(RawValue::from(" 0XfF ").to_number(), 255.0);
        assert_eq!(RawValue::from("0o7").to_number(), 7.0);
        assert_eq!(RawValue::from("0b101").to_number(), 5.0);
        assert!(RawValue::from("0x").to_number().is_nan());
        assert!(RawValue::from("0b102").to_number().is_nan());
        assert!(RawValue::from("-0x10").to_number().is_nan());
        assert!(RawValue::from("0x1.8").to_number().is_nan());
    }

    #[test]
    fn coerces_numbers_and_booleans() {
        assert_eq!(RawValue::from(-2.5).to_number(), -2.5);
        assert_eq!(RawValue::from(true).to_number(), 1.0);
        assert_eq!(RawValue::from(false).to_number(), 0.0);
    }

    #[test]
    fn deserializes_mixed_json() {
        let raw: RawInputs = serde_json::from_str(
            r#"{
                "gravity": "9.81",
                "initialHeight": 100,
                "initialVelocity": null,
                "velocityDirection": "down"
            }"#,
        )
        .unwrap();

        assert_eq!(raw.gravity, Some(RawValue::Text("9.81".into())));
        assert_eq!(raw.initial_height, Some(RawValue::Number(100.0)));
        assert_eq!(raw.initial_velocity, None);
        assert_eq!(raw.velocity_direction.as_ref().and_then(RawValue::as_text), Some("down"));
        assert_eq!(raw.time_step, None);
    }

    #[test]
    fn overlay_prefers_present_fields() {
        let base = RawInputs::standard();
        let patch = RawInputs::default()
            .with_initial_height("2")
            .with_velocity_direction("up");

        let merged = base.clone().overlay(patch);

        assert_eq!(merged.gravity, base.gravity);
        assert_eq!(merged.initial_height, Some(RawValue::from("2")));
        assert_eq!(merged.velocity_direction, Some(RawValue::from("up")));
        assert_eq!(merged.time_step, base.time_step);
    }

    #[test]
    fn serializes_only_present_fields() {
        let raw = RawInputs::default().with_time_step(0.5);
        let json = serde_json::to_string(&raw).unwrap();
        assert_eq!(json, r#"{"timeStep":0.5}"#);
    }
}
