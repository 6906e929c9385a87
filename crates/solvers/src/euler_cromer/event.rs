use freefall_core::State;

/// Event emitted by the Euler-Cromer solver for each sample.
///
/// Step 0 is the release state; steps `1..` follow each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the release state).
    pub step: usize,

    /// The sample emitted at this step, with its height already clamped.
    pub state: State,
}

impl Event {
    /// Returns `true` if this sample is on the ground.
    #[must_use]
    pub fn is_grounded(&self) -> bool {
        self.state.height_si() <= 0.0
    }
}
