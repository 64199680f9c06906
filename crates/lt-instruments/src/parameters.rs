//! Model parameters of the Cox-Ross-Rubinstein lattice.
//!
//! [`LatticeParameters`] carries the inputs shared by every contract
//! (spot, rate, up/down factors, horizon, number of steps).
//! [`LatticeParameters::risk_neutral`] validates them and derives the
//! per-step quantities used by backward induction:
//!
//! * `dt = T / N`
//! * `growth = 1 + r·dt` (simple interest per step)
//! * `df = 1 / growth`
//! * `q = (growth − d) / (u − d)`
//!
//! A parameter set for which `q` falls outside `[0, 1]` admits arbitrage and
//! is rejected rather than priced.

use lt_core::{ensure, DiscountFactor, Price, Probability, Rate, Real, Result, Size, Time};

/// Inputs of the binomial model shared by all contract types.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeParameters {
    /// Asset price at the initial time, `S0`.
    pub spot: Price,
    /// Risk-free rate per unit of time, `r`.
    pub rate: Rate,
    /// Multiplicative up-move factor, `u`.
    pub up: Real,
    /// Multiplicative down-move factor, `d`.
    pub down: Real,
    /// Maturity horizon, `T`.
    pub maturity: Time,
    /// Number of time steps from the initial time to maturity, `N`.
    pub steps: Size,
}

impl LatticeParameters {
    /// Create a parameter set. No validation happens until
    /// [`validate`](Self::validate) or [`risk_neutral`](Self::risk_neutral).
    pub fn new(spot: Price, rate: Rate, up: Real, down: Real, maturity: Time, steps: Size) -> Self {
        Self {
            spot,
            rate,
            up,
            down,
            maturity,
            steps,
        }
    }

    /// Same parameters with a different spot.
    pub fn with_spot(mut self, spot: Price) -> Self {
        self.spot = spot;
        self
    }

    /// Same parameters with a different number of steps.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.steps = steps;
        self
    }

    /// Same parameters with a different rate.
    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    /// Check every admissibility constraint, including `0 <= q <= 1`.
    pub fn validate(&self) -> Result<()> {
        self.risk_neutral().map(|_| ())
    }

    /// Validate the parameters and derive the per-step model quantities.
    pub fn risk_neutral(&self) -> Result<RiskNeutralMeasure> {
        let Self {
            spot,
            rate,
            up,
            down,
            maturity,
            steps,
        } = *self;
        ensure!(
            [spot, rate, up, down, maturity].iter().all(|x| x.is_finite()),
            "parameters must be finite: S0={spot}, r={rate}, u={up}, d={down}, T={maturity}"
        );
        ensure!(steps > 0, "number of time steps N must be positive, got {steps}");
        ensure!(maturity > 0.0, "maturity T must be positive, got {maturity}");
        ensure!(spot > 0.0, "initial asset price S0 must be positive, got {spot}");
        ensure!(down > 0.0, "down factor d must be positive, got {down}");
        ensure!(up > down, "up factor u={up} must exceed down factor d={down}");

        let dt = maturity / steps as Real;
        let growth = 1.0 + rate * dt;
        ensure!(growth > 0.0, "one-step growth 1 + r·dt = {growth} must be positive");
        let q = (growth - down) / (up - down);
        ensure!(
            (0.0..=1.0).contains(&q),
            "risk-neutral probability q={q} outside [0, 1]: need d <= 1 + r·dt <= u \
             (d={down}, 1 + r·dt={growth}, u={up})"
        );

        Ok(RiskNeutralMeasure {
            dt,
            growth,
            discount: 1.0 / growth,
            q,
        })
    }
}

/// Per-step quantities derived from valid [`LatticeParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskNeutralMeasure {
    /// Time increment `T / N`.
    pub dt: Time,
    /// One-step growth of the money account, `1 + r·dt`.
    pub growth: Real,
    /// One-step discount factor, `(1 + r·dt)^-1`.
    pub discount: DiscountFactor,
    /// Risk-neutral probability of an up-move.
    pub q: Probability,
}

impl RiskNeutralMeasure {
    /// Probability of a down-move, `1 − q`.
    pub fn q_down(&self) -> Probability {
        1.0 - self.q
    }

    /// Discount factor over `n` steps, `df^n`.
    pub fn discount_over(&self, n: Size) -> DiscountFactor {
        self.discount.powi(n as i32)
    }
}
