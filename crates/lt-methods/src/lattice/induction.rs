//! Backward induction on a recombining lattice.
//!
//! One induction step maps the value level `i + 1` (size `i + 2`) onto level
//! `i` (size `i + 1`):
//!
//! `V_i[j] = df · (q · V_{i+1}[j+1] + (1 − q) · V_{i+1}[j])`
//!
//! Two kernels implement it. [`roll_back_loop`] updates a `Vec` in place,
//! node by node; [`roll_back_vectorized`] computes the whole level from two
//! shifted views of the previous one. Both evaluate exactly the same
//! floating-point expression per node.
//!
//! Knock-out conditions are path state: after every step the nodes of the
//! *current* level whose price breaches the barrier are zeroed before their
//! value can propagate further back.

use super::BinomialLattice;
use lt_core::{fail, require, DiscountFactor, Price, Probability, Real, Result, Size};
use lt_math::Array;

/// Predicate telling whether a node at the given price is knocked out.
pub type Knockout<'a> = &'a dyn Fn(Price) -> bool;

// ─── Single-step kernels ──────────────────────────────────────────────────────

/// One backward step, in place: `values` holds level `i + 1` on entry and
/// level `i` on exit.
pub fn roll_back_loop(values: &mut Vec<Real>, i: Size, q: Probability, df: DiscountFactor) {
    debug_assert_eq!(values.len(), i + 2, "value level size mismatch");
    for j in 0..=i {
        values[j] = df * (q * values[j + 1] + (1.0 - q) * values[j]);
    }
    values.truncate(i + 1);
}

/// One backward step on a whole level: returns level `i` from level
/// `i + 1`.
///
/// # Panics
/// Panics if `values` is empty.
pub fn roll_back_vectorized(values: &Array, q: Probability, df: DiscountFactor) -> Array {
    let i = values.size() - 1;
    (&(&values.segment(1, i) * q) + &(&values.segment(0, i) * (1.0 - q))) * df
}

/// Zero every node of level `i` whose price is knocked out, node by node.
pub fn apply_knockout_loop(
    values: &mut [Real],
    lattice: &BinomialLattice,
    i: Size,
    knocked_out: Knockout<'_>,
) {
    for (j, v) in values.iter_mut().enumerate() {
        if knocked_out(lattice.underlying(i, j)) {
            *v = 0.0;
        }
    }
}

/// Zero every node of a level whose companion price is knocked out, as a
/// single mask assignment.
pub fn apply_knockout_vectorized(values: &mut Array, prices: &Array, knocked_out: Knockout<'_>) {
    values.assign_where(prices, knocked_out, 0.0);
}

// ─── Full induction ───────────────────────────────────────────────────────────

/// Price a contract by explicit, index-by-index backward induction.
///
/// The terminal price vector is generated once; intermediate prices are only
/// evaluated when a knock-out condition has to be checked.
///
/// # Arguments
/// * `lattice` — the price lattice
/// * `payoff` — terminal payoff `S → value`
/// * `knocked_out` — optional knock-out predicate, checked at maturity and
///   at every earlier level
pub fn backward_induction_loop(
    lattice: &BinomialLattice,
    payoff: &dyn Fn(Price) -> Real,
    knocked_out: Option<Knockout<'_>>,
) -> Result<Real> {
    let n = lattice.steps();
    let (q, df) = (lattice.q(), lattice.discount());

    let mut values: Vec<Real> = lattice.terminal().into_iter().map(payoff).collect();
    if let Some(ko) = knocked_out {
        apply_knockout_loop(&mut values, lattice, n, ko);
    }

    for i in (0..n).rev() {
        roll_back_loop(&mut values, i, q, df);
        if let Some(ko) = knocked_out {
            apply_knockout_loop(&mut values, lattice, i, ko);
        }
    }

    require!(values.len() == 1, "induction ended with {} nodes", values.len());
    finite_value(values[0], n)
}

/// Price a contract by whole-level backward induction.
///
/// Each level's price vector is rebuilt from the closed form when a
/// knock-out mask is needed.
pub fn backward_induction_vectorized(
    lattice: &BinomialLattice,
    payoff: &dyn Fn(Price) -> Real,
    knocked_out: Option<Knockout<'_>>,
) -> Result<Real> {
    let n = lattice.steps();
    let (q, df) = (lattice.q(), lattice.discount());

    let terminal = lattice.level_array(n);
    let mut values = terminal.map(payoff);
    if let Some(ko) = knocked_out {
        apply_knockout_vectorized(&mut values, &terminal, ko);
    }

    for i in (0..n).rev() {
        values = roll_back_vectorized(&values, q, df);
        if let Some(ko) = knocked_out {
            apply_knockout_vectorized(&mut values, &lattice.level_array(i), ko);
        }
    }

    require!(values.size() == 1, "induction ended with {} nodes", values.size());
    finite_value(values[0], n)
}

/// Reject a value that overflowed somewhere in the lattice instead of
/// reporting it as a price.
fn finite_value(value: Real, steps: Size) -> Result<Real> {
    if !value.is_finite() {
        fail!("lattice value is {value} after {steps} steps: node prices overflow");
    }
    Ok(value)
}
