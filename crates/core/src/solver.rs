use crate::{Parameters, State};

/// A trajectory strategy: turns validated parameters into a time series.
///
/// Implementations must be deterministic and return samples in chronological
/// order, starting with the release state at `t = 0`. Because [`Parameters`]
/// can only hold valid values, `solve` has no error path.
///
/// The trait is object safe, so strategies can be swapped at runtime through
/// `Box<dyn Solver>` as well as statically through generics.
pub trait Solver {
    /// Produces the ordered trajectory samples for `parameters`.
    fn solve(&self, parameters: &Parameters) -> Vec<State>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn solve(&self, parameters: &Parameters) -> Vec<State> {
        (**self).solve(parameters)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn solve(&self, parameters: &Parameters) -> Vec<State> {
        (**self).solve(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Time, time::second};

    /// Returns only the release state.
    struct Stationary;

    impl Solver for Stationary {
        fn solve(&self, parameters: &Parameters) -> Vec<State> {
            vec![State::new(
                Time::new::<second>(0.0),
                parameters.initial_height(),
                parameters.initial_velocity(),
            )]
        }
    }

    #[test]
    fn boxed_and_borrowed_solvers_delegate() {
        let parameters = Parameters::from_si(9.81, 3.0, 1.0, 0.1).unwrap();

        let boxed: Box<dyn Solver> = Box::new(Stationary);
        let borrowed = &Stationary;

        assert_eq!(boxed.solve(&parameters), Stationary.solve(&parameters));
        assert_eq!(borrowed.solve(&parameters), Stationary.solve(&parameters));
        assert_eq!(boxed.solve(&parameters)[0].height_si(), 3.0);
    }
}
