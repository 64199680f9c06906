//! Closed-form binomial price of a European option.
//!
//! The terminal node `j` is reached with probability `C(N, j) q^j (1−q)^(N−j)`,
//! so
//!
//! `V_0 = df^N · Σ_j P(X = j) · payoff(S0 · u^j · d^(N−j))`, `X ~ Bin(N, q)`.
//!
//! This is the value both backward-induction strategies must reproduce.

use lt_core::{fail, Real, Result};
use lt_instruments::{EuropeanOption, LatticeParameters};
use lt_math::{round_price, BinomialDistribution};
use lt_methods::BinomialLattice;

/// Closed-form binomial price of a European option, rounded to two
/// decimals.
pub fn closed_form_european_price(
    option: &EuropeanOption,
    params: &LatticeParameters,
) -> Result<Real> {
    closed_form_european_value(option, params).map(round_price)
}

/// Closed-form binomial price of a European option at full precision.
pub fn closed_form_european_value(
    option: &EuropeanOption,
    params: &LatticeParameters,
) -> Result<Real> {
    let lattice = crate::validated_lattice("european", params, option.validate())?;
    let n = lattice.steps();
    let dist = BinomialDistribution::new(lattice.q(), n as u64)?;
    let expectation: Real = terminal_payoffs(&lattice, option)
        .enumerate()
        .map(|(j, payoff)| dist.pmf(j as u64) * payoff)
        .sum();
    if !expectation.is_finite() {
        fail!("closed-form expectation is {expectation} for N={n}: node prices overflow");
    }
    Ok(lattice.measure().discount_over(n) * expectation)
}

fn terminal_payoffs<'a>(
    lattice: &'a BinomialLattice,
    option: &'a EuropeanOption,
) -> impl Iterator<Item = Real> + 'a {
    let n = lattice.steps();
    (0..=n).map(move |j| option.value_at(lattice.underlying(n, j)))
}
