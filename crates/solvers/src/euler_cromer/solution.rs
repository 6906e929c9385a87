use freefall_core::State;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The trajectory reached the ground, or started on it.
    Grounded,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler-Cromer integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Samples in chronological order, starting with the release state.
    pub states: Vec<State>,

    /// Number of integration steps taken.
    pub steps: usize,
}
