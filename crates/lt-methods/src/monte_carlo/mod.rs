//! Monte Carlo sampling of lattice paths.
//!
//! Draws up/down sequences under the risk-neutral probability `q` and
//! evaluates a [`PathPricer`] on each one. Unlike path enumeration this
//! works for any number of steps; the price is an estimate with a standard
//! error.

use crate::lattice::{BinomialLattice, PathPricer};
use lt_core::{ensure, Real, Result, Size};
use lt_math::{MersenneTwisterUniformRng, Statistics};

/// A single sampled path: the number of up-moves after each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticePath {
    /// `ups[i]` is the lattice index `j` of the node visited at level `i`.
    pub ups: Vec<Size>,
}

impl LatticePath {
    /// Number of steps.
    pub fn steps(&self) -> Size {
        self.ups.len() - 1
    }

    /// Node index at maturity.
    pub fn terminal_index(&self) -> Size {
        self.ups.last().copied().unwrap_or(0)
    }
}

/// Generates paths through a binomial lattice.
#[derive(Debug)]
pub struct LatticePathGenerator<'a> {
    lattice: &'a BinomialLattice,
    rng: MersenneTwisterUniformRng,
}

impl<'a> LatticePathGenerator<'a> {
    /// Create a generator seeded with `seed`.
    pub fn new(lattice: &'a BinomialLattice, seed: u64) -> Self {
        Self {
            lattice,
            rng: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Draw one path.
    pub fn next_path(&mut self) -> LatticePath {
        let q = self.lattice.q();
        let mut ups = Vec::with_capacity(self.lattice.steps() + 1);
        let mut j = 0;
        ups.push(j);
        for _ in 0..self.lattice.steps() {
            j = self.lattice.descendant(j, self.rng.next_bernoulli(q));
            ups.push(j);
        }
        LatticePath { ups }
    }
}

/// Outcome of a Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonteCarloEstimate {
    /// Discounted mean payoff.
    pub value: Real,
    /// Standard error of `value`.
    pub error_estimate: Real,
    /// Number of simulated paths.
    pub samples: Size,
}

/// Estimate the price of a path-dependent payoff from `paths` sampled
/// paths.
pub fn mc_path_price(
    lattice: &BinomialLattice,
    pricer: &dyn PathPricer,
    paths: Size,
    seed: u64,
) -> Result<MonteCarloEstimate> {
    ensure!(paths >= 2, "at least two Monte Carlo paths are needed, got {paths}");
    let n = lattice.steps();
    let mut generator = LatticePathGenerator::new(lattice, seed);
    let mut stats = Statistics::new();

    for _ in 0..paths {
        let path = generator.next_path();
        let acc = path
            .ups
            .iter()
            .enumerate()
            .fold(pricer.initial(), |acc, (i, &j)| {
                pricer.accumulate(acc, lattice.underlying(i, j))
            });
        stats.add(pricer.value(acc, n + 1, lattice.underlying(n, path.terminal_index())));
    }

    let discount = lattice.measure().discount_over(n);
    Ok(MonteCarloEstimate {
        value: discount * stats.mean().unwrap_or(0.0),
        error_estimate: discount * stats.error_estimate().unwrap_or(0.0),
        samples: stats.samples(),
    })
}
