//! Event-driven strategy recalculation.
//!
//! The trigger is a state machine over a case's [`GameParameters`] with
//! two states, Idle and Recalculating, and both transitions inside one
//! synchronous call: a significant [`CaseEvent`] enters the case's
//! critical section (Recalculating), applies the event's parameter
//! deltas, re-derives the optimal strategy, persists it, and returns to
//! Idle with a [`Recalculation`] record. Non-significant events never
//! leave Idle.

use log::info;
use serde::{Deserialize, Serialize};

use crate::docket::event::CaseEvent;
use crate::docket::params::{GameParameters, OptimalStrategy};
use crate::docket::store::ParameterStore;

/// Recalculates case strategy in response to docket events.
///
/// Generic over the backing [`ParameterStore`]; the store provides the
/// per-case serialization point, the trigger provides the update
/// procedure.
pub struct RecalculationTrigger<S: ParameterStore> {
    store: S,
}

impl<S: ParameterStore> RecalculationTrigger<S> {
    /// Create a trigger over the given parameter store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the backing store (for subscription management).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one docket event for a case.
    ///
    /// Returns `Ok(None)` for filings that do not warrant recalculation.
    /// Returns [`TriggerError::NotConfigured`] when the event is
    /// significant but the case has no stored parameters — the trigger
    /// never invents defaults.
    pub fn process_event(
        &self,
        case_id: &str,
        event: &CaseEvent,
    ) -> Result<Option<Recalculation>, TriggerError> {
        if !event.is_significant() {
            return Ok(None);
        }

        let recalculation = self
            .store
            .update(case_id, |params| recalculate(params, event))
            .ok_or_else(|| TriggerError::NotConfigured {
                case_id: case_id.to_string(),
            })?;

        info!(
            "case {}: {} -> {} (changed: {})",
            case_id,
            event.normalized_filing_type(),
            recalculation.optimal_strategy,
            recalculation.strategy_changed
        );
        Ok(Some(recalculation))
    }
}

/// Apply one event's deltas and re-derive the optimal strategy.
///
/// Runs inside the case's critical section.
fn recalculate(params: &mut GameParameters, event: &CaseEvent) -> Recalculation {
    let filing_type = event.normalized_filing_type();
    let previous_strategy = params.previous_optimal_strategy;

    let mut win_prob_adjustment = 0.0;
    if filing_type.contains("summary_judgment") {
        let movant = event.detail_str("movant");
        win_prob_adjustment = if event.detail_bool("granted") {
            // A granted motion swings the case toward the movant.
            if movant == Some("plaintiff") { 0.3 } else { -0.3 }
        } else {
            // A denial is a smaller swing against the movant.
            if movant == Some("defendant") { 0.1 } else { -0.1 }
        };
    } else if filing_type.contains("settlement") {
        // A new offer changes the game; keep the stored offer when the
        // filing carries no amount.
        if let Some(amount) = event.detail_f64("amount") {
            params.settlement_offer = amount;
        }
    } else if filing_type.contains("expert") {
        // Expert reports move the damages estimate.
        let delta = event.detail_f64("damages_opinion_change").unwrap_or(0.0);
        params.expected_judgment += delta;
    }

    params.win_probability += win_prob_adjustment;
    params.clamp_win_probability();

    let trial_ev = params.trial_ev();
    let settlement_value = params.settlement_offer;
    let optimal_strategy = if trial_ev > settlement_value {
        OptimalStrategy::Trial
    } else {
        OptimalStrategy::Settle
    };
    let strategy_changed =
        previous_strategy.is_some() && previous_strategy != Some(optimal_strategy);
    params.previous_optimal_strategy = Some(optimal_strategy);

    let recommendation_text = match optimal_strategy {
        OptimalStrategy::Trial => format!(
            "Continue to trial. Expected value (${:.0}) exceeds settlement (${:.0}).",
            trial_ev, settlement_value
        ),
        OptimalStrategy::Settle => format!(
            "Accept settlement. Settlement (${:.0}) exceeds trial EV (${:.0}).",
            settlement_value, trial_ev
        ),
    };

    Recalculation {
        optimal_strategy,
        previous_strategy,
        strategy_changed,
        win_probability: params.win_probability,
        trial_ev,
        settlement_value,
        recommendation_text,
    }
}

/// Outcome of one strategy recalculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recalculation {
    /// The newly recommended strategy.
    pub optimal_strategy: OptimalStrategy,
    /// The strategy recommended before this event, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_strategy: Option<OptimalStrategy>,
    /// Whether the recommendation flipped. Always false on the first
    /// recalculation.
    pub strategy_changed: bool,
    /// The win probability after the event's adjustment and clamping.
    pub win_probability: f64,
    /// Expected value of going to trial.
    pub trial_ev: f64,
    /// The settlement offer the trial EV was compared against.
    pub settlement_value: f64,
    /// Human-readable recommendation.
    pub recommendation_text: String,
}

/// Errors raised by the recalculation trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerError {
    /// A significant event arrived for a case with no stored parameters.
    NotConfigured {
        /// The case the event was routed to.
        case_id: String,
    },
}

impl std::fmt::Display for TriggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerError::NotConfigured { case_id } => {
                write!(f, "no game parameters configured for case {}", case_id)
            }
        }
    }
}

impl std::error::Error for TriggerError {}
