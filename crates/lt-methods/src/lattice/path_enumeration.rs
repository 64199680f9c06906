//! Exact pricing of path-dependent payoffs by path enumeration.
//!
//! A recombining lattice cannot carry a running average: two paths meeting
//! at the same node generally have different histories. Path-dependent
//! contracts are therefore priced on the underlying non-recombining tree of
//! all `2^N` up/down sequences, each path carrying its own accumulator. The
//! node prices themselves still come from the recombining closed form
//! `S(i, j)`, where `j` counts the up-moves so far.
//!
//! Two strategies are provided:
//!
//! * [`enumerate_paths_loop`] — depth-first recursion, each call returning
//!   the discounted expected value of its subtree.
//! * [`enumerate_paths_vectorized`] — breadth-first expansion of all path
//!   states one level at a time, followed by a pairwise fold that halves the
//!   value vector at every step.
//!
//! Both are exponential in `N`, so the number of steps is capped at
//! [`MAX_ENUMERATION_STEPS`].

use super::BinomialLattice;
use lt_core::{ensure, require, Price, Real, Result, Size};
use lt_instruments::AsianOption;
use lt_math::Array;

/// Largest number of steps accepted by the enumeration strategies
/// (`2^20` leaves).
pub const MAX_ENUMERATION_STEPS: Size = 20;

/// A payoff that depends on the whole path through a running accumulator.
pub trait PathPricer {
    /// Accumulator before the first observation.
    fn initial(&self) -> Real;

    /// Fold one observed price into the accumulator.
    fn accumulate(&self, acc: Real, price: Price) -> Real;

    /// Payoff of a path with `observations` fixings, final accumulator `acc`
    /// and terminal price `terminal`.
    fn value(&self, acc: Real, observations: Size, terminal: Price) -> Real;
}

impl PathPricer for AsianOption {
    fn initial(&self) -> Real {
        self.mean_type.initial()
    }

    fn accumulate(&self, acc: Real, price: Price) -> Real {
        self.mean_type.accumulate(acc, price)
    }

    fn value(&self, acc: Real, observations: Size, terminal: Price) -> Real {
        self.value_from_accumulator(acc, observations, terminal)
    }
}

fn check_enumerable(lattice: &BinomialLattice) -> Result<()> {
    ensure!(
        lattice.steps() <= MAX_ENUMERATION_STEPS,
        "path enumeration supports at most {MAX_ENUMERATION_STEPS} steps, got {}",
        lattice.steps()
    );
    Ok(())
}

// ─── Depth-first ──────────────────────────────────────────────────────────────

/// Price a path-dependent payoff by depth-first recursion over all paths.
pub fn enumerate_paths_loop(lattice: &BinomialLattice, pricer: &dyn PathPricer) -> Result<Real> {
    check_enumerable(lattice)?;
    let acc = pricer.accumulate(pricer.initial(), lattice.underlying(0, 0));
    Ok(subtree_value(lattice, pricer, 0, 0, acc))
}

/// Discounted expected payoff of the subtree rooted at node `(i, j)` whose
/// path so far has accumulator `acc`.
fn subtree_value(
    lattice: &BinomialLattice,
    pricer: &dyn PathPricer,
    i: Size,
    j: Size,
    acc: Real,
) -> Real {
    let n = lattice.steps();
    if i == n {
        return pricer.value(acc, n + 1, lattice.underlying(n, j));
    }
    let (q, df) = (lattice.q(), lattice.discount());
    let j_up = lattice.descendant(j, true);
    let j_down = lattice.descendant(j, false);
    let up = subtree_value(
        lattice,
        pricer,
        i + 1,
        j_up,
        pricer.accumulate(acc, lattice.underlying(i + 1, j_up)),
    );
    let down = subtree_value(
        lattice,
        pricer,
        i + 1,
        j_down,
        pricer.accumulate(acc, lattice.underlying(i + 1, j_down)),
    );
    df * (q * up + (1.0 - q) * down)
}

// ─── Breadth-first ────────────────────────────────────────────────────────────

/// Price a path-dependent payoff by expanding all path states level by
/// level and folding the leaf payoffs back pairwise.
///
/// At level `i` path `m` has children `2m` (down) and `2m + 1` (up), so the
/// backward fold pairs adjacent entries.
pub fn enumerate_paths_vectorized(
    lattice: &BinomialLattice,
    pricer: &dyn PathPricer,
) -> Result<Real> {
    check_enumerable(lattice)?;
    let n = lattice.steps();
    let (q, df) = (lattice.q(), lattice.discount());

    // Forward: accumulators and up-move counts of every path prefix.
    let mut accs = Array::from_vec(vec![
        pricer.accumulate(pricer.initial(), lattice.underlying(0, 0)),
    ]);
    let mut ups: Vec<Size> = vec![0];
    for i in 0..n {
        let width = 2 * ups.len();
        let next_ups: Vec<Size> = (0..width)
            .map(|k| lattice.descendant(ups[k / 2], k % 2 == 1))
            .collect();
        accs = Array::from_fn(width, |k| {
            pricer.accumulate(accs[k / 2], lattice.underlying(i + 1, next_ups[k]))
        });
        ups = next_ups;
    }

    // Leaves.
    let mut values = Array::from_fn(ups.len(), |k| {
        pricer.value(accs[k], n + 1, lattice.underlying(n, ups[k]))
    });

    // Backward: halve the vector at every step.
    for _ in 0..n {
        let up = values.strided(1, 2);
        let down = values.strided(0, 2);
        values = (&(&up * q) + &(&down * (1.0 - q))) * df;
    }

    require!(values.size() == 1, "fold ended with {} values", values.size());
    Ok(values[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lt_instruments::{LatticeParameters, MeanType, OptionType, StrikeType};

    fn lattice(up: Real, down: Real, steps: Size) -> BinomialLattice {
        BinomialLattice::new(&LatticeParameters::new(100.0, 0.05, up, down, 1.0, steps)).unwrap()
    }

    #[test]
    fn one_step_arithmetic_average() {
        // Paths 100 → 120 and 100 → 80; averages 110 and 90.
        let l = lattice(1.2, 0.8, 1);
        let option =
            AsianOption::new(OptionType::Call, 100.0, StrikeType::Fixed, MeanType::Arithmetic);
        let expected = l.discount() * l.q() * 10.0;
        assert_abs_diff_eq!(enumerate_paths_loop(&l, &option).unwrap(), expected, epsilon = 1e-12);
        assert_abs_diff_eq!(
            enumerate_paths_vectorized(&l, &option).unwrap(),
            expected,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(expected, 5.952_380_952_380_952, epsilon = 1e-12);
    }

    #[test]
    fn strategies_agree_for_every_mean() {
        let l = lattice(1.1, 1.0 / 1.1, 8);
        for mean_type in MeanType::ALL {
            for strike_type in [StrikeType::Fixed, StrikeType::Floating] {
                for option_type in [OptionType::Call, OptionType::Put] {
                    let option = AsianOption::new(option_type, 100.0, strike_type, mean_type);
                    let a = enumerate_paths_loop(&l, &option).unwrap();
                    let b = enumerate_paths_vectorized(&l, &option).unwrap();
                    assert_abs_diff_eq!(a, b, epsilon = 1e-10);
                }
            }
        }
    }

    #[test]
    fn four_step_reference_values() {
        let l = lattice(1.1, 1.0 / 1.1, 4);
        let fixed_call = |m| AsianOption::new(OptionType::Call, 100.0, StrikeType::Fixed, m);
        let cases = [
            (MeanType::Arithmetic, 5.458_401_619_136_985_5),
            (MeanType::Geometric, 5.212_843_308_026_045),
            (MeanType::Harmonic, 4.990_175_552_766_573),
            (MeanType::Quadratic, 5.703_958_250_086_109),
            (MeanType::Max, 13.949_510_926_471_545),
            (MeanType::Min, 0.0),
        ];
        for (m, expected) in cases {
            let value = enumerate_paths_loop(&l, &fixed_call(m)).unwrap();
            assert_abs_diff_eq!(value, expected, epsilon = 1e-9);
        }
        let floating_put = AsianOption::floating(OptionType::Put, MeanType::Arithmetic);
        assert_abs_diff_eq!(
            enumerate_paths_vectorized(&l, &floating_put).unwrap(),
            3.093_279_296_794_697_6,
            epsilon = 1e-9
        );
    }

    #[test]
    fn floating_put_on_running_minimum_is_worthless() {
        // A floating-strike put on the running minimum can never pay: the
        // minimum is at most the terminal price.
        let l = lattice(1.1, 1.0 / 1.1, 6);
        let option = AsianOption::floating(OptionType::Put, MeanType::Min);
        assert_eq!(enumerate_paths_loop(&l, &option).unwrap(), 0.0);
    }

    #[test]
    fn rejects_too_many_steps() {
        let l = lattice(1.1, 1.0 / 1.1, MAX_ENUMERATION_STEPS + 1);
        let option = AsianOption::floating(OptionType::Call, MeanType::Arithmetic);
        assert!(enumerate_paths_loop(&l, &option).is_err());
        assert!(enumerate_paths_vectorized(&l, &option).is_err());
    }
}
