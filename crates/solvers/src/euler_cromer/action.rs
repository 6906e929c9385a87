/// Control actions supported by the Euler-Cromer solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop integrating and return the samples produced so far.
    StopEarly,
}
