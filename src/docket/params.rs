//! Per-case game parameters.
//!
//! [`GameParameters`] is the one mutable entity in the engine. It is owned
//! by a case subscription, lives in a [`ParameterStore`], and is updated
//! only through the recalculation trigger's event-processing procedure.
//!
//! [`ParameterStore`]: crate::docket::store::ParameterStore

use serde::{Deserialize, Serialize};

/// Floor for the stored win probability. Certainty is never allowed.
pub const WIN_PROBABILITY_FLOOR: f64 = 0.05;

/// Ceiling for the stored win probability.
pub const WIN_PROBABILITY_CEILING: f64 = 0.95;

/// The recommended course of action for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimalStrategy {
    /// Proceed to trial.
    Trial,
    /// Accept the settlement offer.
    Settle,
}

impl std::fmt::Display for OptimalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimalStrategy::Trial => write!(f, "trial"),
            OptimalStrategy::Settle => write!(f, "settle"),
        }
    }
}

/// Mutable game-theoretic parameters for one case subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameParameters {
    /// The settlement offer currently on the table.
    pub settlement_offer: f64,
    /// Expected judgment amount if the plaintiff wins at trial.
    pub expected_judgment: f64,
    /// Cost of taking the case to trial.
    pub trial_costs: f64,
    /// Probability of winning at trial, kept inside
    /// [[`WIN_PROBABILITY_FLOOR`], [`WIN_PROBABILITY_CEILING`]] by the
    /// trigger.
    pub win_probability: f64,
    /// The strategy recommended by the previous recalculation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_optimal_strategy: Option<OptimalStrategy>,
}

impl GameParameters {
    /// Create parameters with no recalculation history.
    pub fn new(
        settlement_offer: f64,
        expected_judgment: f64,
        trial_costs: f64,
        win_probability: f64,
    ) -> Self {
        Self {
            settlement_offer,
            expected_judgment,
            trial_costs,
            win_probability,
            previous_optimal_strategy: None,
        }
    }

    /// Expected value of going to trial under the current parameters.
    pub fn trial_ev(&self) -> f64 {
        self.win_probability * self.expected_judgment - self.trial_costs
    }

    /// Clamp the win probability back into its allowed band.
    pub fn clamp_win_probability(&mut self) {
        self.win_probability = self
            .win_probability
            .clamp(WIN_PROBABILITY_FLOOR, WIN_PROBABILITY_CEILING);
    }
}
