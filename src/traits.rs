//! Core trait definitions for rolling-array dynamic programs.
//!
//! To run a DP through [`SweepEngine`](crate::engine::SweepEngine), implement
//! [`RollingDp`] for a struct that captures the instance (grid, sequences,
//! digit string, ...).
//!
//! The trait encodes a layered recurrence:
//! - Layers 0..=T, with transitions only between consecutive layers.
//! - Frontiers: compact representation of all DP values on one layer.
//! - Extraction: the answer is read off the frontier at layer T.
//!
//! The engine keeps two frontiers alive and swaps them after every step, so
//! memory stays O(W) in the frontier width regardless of T.

/// Trait for a layered dynamic program evaluated with rolling frontiers.
///
/// A `RollingDp` corresponds to a *fixed* DP instance: in practice, a struct
/// borrowing its input data.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `forward_step(i, prev, next)` maps layer `i` -> layer `i+1`, writing
///   every cell of `next`.
/// - After T steps, `extract` reads the answer from the frontier at layer T.
pub trait RollingDp {
    /// Representation of the DP frontier at a layer (a DP row, a pair of
    /// scalars, ...).
    type Frontier: Clone;

    /// Value produced from the final frontier.
    type Output;

    /// Number of DP layers/steps `T`.
    fn num_layers(&self) -> usize;

    /// Initialize the frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from layer `layer` to `layer + 1`.
    ///
    /// Requirements:
    /// - Must only depend on `prev` and fixed problem data (cells of `next`
    ///   already written during this step may be read back).
    /// - Must overwrite every cell of `next`; its previous contents are stale.
    fn forward_step(&self, layer: usize, prev: &Self::Frontier, next: &mut Self::Frontier);

    /// Extract the answer from the frontier at layer T.
    fn extract(&self, frontier_t: &Self::Frontier) -> Self::Output;
}
