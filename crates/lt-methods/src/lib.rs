//! # lt-methods
//!
//! Numerical methods on the binomial lattice: lattice construction,
//! backward induction (scalar and vectorized kernels, knock-out masks),
//! exact path enumeration for path-dependent payoffs, and Monte Carlo
//! sampling of lattice paths.
//!
//! # Modules
//!
//! * [`lattice`] — lattice, backward induction, path enumeration
//! * [`monte_carlo`] — path generation and Monte Carlo estimation

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: binomial lattice, backward induction, path enumeration.
pub mod lattice;

/// Monte Carlo sampling of lattice paths.
pub mod monte_carlo;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    backward_induction_loop, backward_induction_vectorized, enumerate_paths_loop,
    enumerate_paths_vectorized, BinomialLattice, Knockout, PathPricer, MAX_ENUMERATION_STEPS,
};
pub use monte_carlo::{mc_path_price, LatticePath, LatticePathGenerator, MonteCarloEstimate};
