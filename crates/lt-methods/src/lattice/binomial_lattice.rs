//! Recombining Cox-Ross-Rubinstein lattice with explicit up/down factors.
//!
//! The lattice has `steps + 1` time levels, level `i` having `i + 1` nodes.
//! Node `(i, j)` is the state after `j` up-moves and `i − j` down-moves:
//!
//! `S(i, j) = S0 · u^j · d^(i−j)`
//!
//! Every node price is evaluated from this closed form in log space,
//! `S0 · exp(j·ln u + (i−j)·ln d)`, never by repeated multiplication along a
//! path. The scalar and the vectorized level builders therefore produce
//! bit-identical prices, and `u^j` alone cannot overflow on a deep lattice
//! whose node price is still representable.

use lt_core::{DiscountFactor, Price, Probability, Real, Result, Size, Time};
use lt_instruments::{LatticeParameters, RiskNeutralMeasure};
use lt_math::Array;

/// A recombining binomial lattice of underlying prices.
#[derive(Debug, Clone)]
pub struct BinomialLattice {
    spot: Price,
    ln_up: Real,
    ln_down: Real,
    steps: Size,
    measure: RiskNeutralMeasure,
}

impl BinomialLattice {
    /// Build the lattice for validated parameters.
    ///
    /// Fails with `Error::InvalidParameter` if the parameters are
    /// inadmissible (see [`LatticeParameters::risk_neutral`]).
    pub fn new(params: &LatticeParameters) -> Result<Self> {
        let measure = params.risk_neutral()?;
        Ok(Self {
            spot: params.spot,
            ln_up: params.up.ln(),
            ln_down: params.down.ln(),
            steps: params.steps,
            measure,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────

    /// Number of time steps `N`.
    pub fn steps(&self) -> Size {
        self.steps
    }

    /// Number of nodes at level `i` (always `i + 1`).
    pub fn size(&self, i: Size) -> Size {
        i + 1
    }

    /// Initial underlying price.
    pub fn spot(&self) -> Price {
        self.spot
    }

    /// Time increment per step.
    pub fn dt(&self) -> Time {
        self.measure.dt
    }

    /// Risk-neutral up probability.
    pub fn q(&self) -> Probability {
        self.measure.q
    }

    /// One-step discount factor.
    pub fn discount(&self) -> DiscountFactor {
        self.measure.discount
    }

    /// Derived per-step quantities.
    pub fn measure(&self) -> &RiskNeutralMeasure {
        &self.measure
    }

    /// Index of the descendant of node `(i, j)` at level `i + 1`;
    /// `up = false` is the down branch.
    pub fn descendant(&self, j: Size, up: bool) -> Size {
        j + usize::from(up)
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// Underlying price at node `(i, j)`.
    #[inline]
    pub fn underlying(&self, i: Size, j: Size) -> Price {
        debug_assert!(j <= i, "node ({i}, {j}) outside the lattice");
        self.spot * self.log_growth(i, j).exp()
    }

    /// `j·ln u + (i−j)·ln d`, the log of the cumulative move to node `(i, j)`.
    #[inline]
    fn log_growth(&self, i: Size, j: Size) -> Real {
        j as Real * self.ln_up + (i - j) as Real * self.ln_down
    }

    /// Prices of level `i`, built node by node.
    pub fn level(&self, i: Size) -> Vec<Price> {
        (0..self.size(i)).map(|j| self.underlying(i, j)).collect()
    }

    /// Prices of level `i`, built as a whole vector: the up-move and
    /// down-move log contributions are summed element-wise, then mapped
    /// through `S0 · exp(·)`.
    pub fn level_array(&self, i: Size) -> Array {
        let ups = Array::from_fn(self.size(i), |j| j as Real * self.ln_up);
        let downs = Array::from_fn(self.size(i), |j| (i - j) as Real * self.ln_down);
        (&ups + &downs).map(|x| self.spot * x.exp())
    }

    /// Prices at maturity (level `N`).
    pub fn terminal(&self) -> Vec<Price> {
        self.level(self.steps)
    }
}
