//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`BinomialLattice`] — recombining CRR lattice with explicit `u` / `d`
//! * [`induction`] — backward-induction kernels (index loop and whole-level)
//!   with optional knock-out masks
//! * [`path_enumeration`] — exact pricing of path-dependent payoffs on the
//!   non-recombining tree

pub mod binomial_lattice;
pub mod induction;
pub mod path_enumeration;

pub use binomial_lattice::BinomialLattice;
pub use induction::{
    apply_knockout_loop, apply_knockout_vectorized, backward_induction_loop,
    backward_induction_vectorized, roll_back_loop, roll_back_vectorized, Knockout,
};
pub use path_enumeration::{
    enumerate_paths_loop, enumerate_paths_vectorized, PathPricer, MAX_ENUMERATION_STEPS,
};
