//! Generic rolling-frontier DP engine.
//!
//! The engine drives any [`RollingDp`] from layer 0 to layer T with two
//! frontier buffers that are swapped after each step. A recording variant
//! keeps a copy of every frontier for diagnostics and table dumps.

use crate::traits::RollingDp;

/// Rolling DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use algo_drills::{problems::edit_distance::EditDistanceProblem, SweepEngine};
///
/// let problem = EditDistanceProblem::new(b"kitten", b"sitting");
/// let engine = SweepEngine::new(problem);
/// assert_eq!(engine.run(), 3);
/// ```
pub struct SweepEngine<P: RollingDp> {
    problem: P,
}

impl<P: RollingDp> SweepEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consume the engine and hand the problem back.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Sweep all layers and return the extracted answer.
    ///
    /// Only two frontiers are live at any time.
    pub fn run(&self) -> P::Output {
        let t = self.problem.num_layers();
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("rolling_sweep", layers = t);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut prev = self.problem.init_frontier();
        if t == 0 {
            return self.problem.extract(&prev);
        }
        let mut next = prev.clone();
        for layer in 0..t {
            self.problem.forward_step(layer, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
        }
        self.problem.extract(&prev)
    }

    /// Sweep all layers, recording the frontier at every layer 0..=T.
    ///
    /// The returned table has `num_layers() + 1` entries; entry `i` is the
    /// frontier at layer `i`. Memory is O(T·W).
    pub fn run_with_table(&self) -> (P::Output, Vec<P::Frontier>) {
        let t = self.problem.num_layers();
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("rolling_sweep_recorded", layers = t);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = Vec::with_capacity(t + 1);
        let mut prev = self.problem.init_frontier();
        table.push(prev.clone());
        let mut next = prev.clone();
        for layer in 0..t {
            self.problem.forward_step(layer, &prev, &mut next);
            std::mem::swap(&mut prev, &mut next);
            table.push(prev.clone());
        }
        (self.problem.extract(&prev), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts compositions of `target` into parts 1 and 2 (Fibonacci).
    struct Stairs {
        target: usize,
    }

    impl RollingDp for Stairs {
        type Frontier = (u64, u64);
        type Output = u64;

        fn num_layers(&self) -> usize {
            self.target
        }

        fn init_frontier(&self) -> Self::Frontier {
            (0, 1)
        }

        fn forward_step(&self, _layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier) {
            *next = (prev.1, prev.0 + prev.1);
        }

        fn extract(&self, frontier_t: &Self::Frontier) -> Self::Output {
            frontier_t.1
        }
    }

    #[test]
    fn zero_layers_extracts_initial_frontier() {
        let engine = SweepEngine::new(Stairs { target: 0 });
        assert_eq!(engine.run(), 1);
        let (out, table) = engine.run_with_table();
        assert_eq!(out, 1);
        assert_eq!(table, vec![(0, 1)]);
    }

    #[test]
    fn run_and_recorded_run_agree() {
        for target in 0..30 {
            let engine = SweepEngine::new(Stairs { target });
            let (out, table) = engine.run_with_table();
            assert_eq!(engine.run(), out, "target={target}");
            assert_eq!(table.len(), target + 1);
            assert_eq!(table.last().map(|f| f.1), Some(out));
        }
    }

    #[test]
    fn fibonacci_values() {
        let engine = SweepEngine::new(Stairs { target: 10 });
        assert_eq!(engine.run(), 89);
        assert_eq!(engine.problem().target, 10);
        assert_eq!(engine.into_problem().target, 10);
    }
}
