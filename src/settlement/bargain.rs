//! Settlement bargaining analysis (BATNA / ZOPA / Nash bargaining point).
//!
//! The settlement negotiation reduces to each side's best alternative:
//! the plaintiff can walk away to trial and expects
//! `win_probability * expected_judgment - trial_costs_plaintiff`; the
//! defendant's alternative costs
//! `win_probability * expected_judgment + trial_costs_defendant`. A zone
//! of possible agreement exists exactly when the plaintiff's walk-away
//! value is below the defendant's walk-away cost; trial costs are what
//! create the zone.

use serde::{Deserialize, Serialize};

/// Inputs to a settlement bargaining analysis.
///
/// Validated at construction: every monetary field must be finite,
/// `win_probability` must lie in [0, 1], and the optional plaintiff
/// bargaining power must lie in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BargainingState {
    /// The plaintiff's current demand.
    pub plaintiff_demand: f64,
    /// The defendant's current offer.
    pub defendant_offer: f64,
    /// Probability the plaintiff wins at trial.
    pub win_probability: f64,
    /// Expected judgment amount if the plaintiff wins.
    pub expected_judgment: f64,
    /// The plaintiff's cost of going to trial.
    pub trial_costs_plaintiff: f64,
    /// The defendant's cost of going to trial.
    pub trial_costs_defendant: f64,
    /// Plaintiff's bargaining power α in [0, 1]; `None` means equal power.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintiff_power: Option<f64>,
}

impl BargainingState {
    /// Validate the state, returning it unchanged when well-formed.
    pub fn validated(self) -> Result<Self, BargainError> {
        for (name, value) in [
            ("plaintiff_demand", self.plaintiff_demand),
            ("defendant_offer", self.defendant_offer),
            ("expected_judgment", self.expected_judgment),
            ("trial_costs_plaintiff", self.trial_costs_plaintiff),
            ("trial_costs_defendant", self.trial_costs_defendant),
        ] {
            if !value.is_finite() {
                return Err(BargainError::NonFiniteValue { field: name, value });
            }
        }
        if !(0.0..=1.0).contains(&self.win_probability) {
            return Err(BargainError::ProbabilityOutOfRange {
                field: "win_probability",
                value: self.win_probability,
            });
        }
        if let Some(power) = self.plaintiff_power {
            if !(0.0..=1.0).contains(&power) {
                return Err(BargainError::ProbabilityOutOfRange {
                    field: "plaintiff_power",
                    value: power,
                });
            }
        }
        Ok(self)
    }

    /// The plaintiff's best alternative to settling: expected trial value.
    pub fn plaintiff_batna(&self) -> f64 {
        self.win_probability * self.expected_judgment - self.trial_costs_plaintiff
    }

    /// The defendant's best alternative to settling: expected trial cost.
    pub fn defendant_batna(&self) -> f64 {
        self.win_probability * self.expected_judgment + self.trial_costs_defendant
    }
}

/// Result of a settlement bargaining analysis.
///
/// When no zone of possible agreement exists, `zopa_range` and
/// `nash_solution` are omitted — that outcome means "no mutually
/// beneficial settlement value", not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BargainingAnalysis {
    /// Plaintiff's best alternative to a negotiated agreement.
    pub plaintiff_batna: f64,
    /// Defendant's best alternative to a negotiated agreement.
    pub defendant_batna: f64,
    /// Whether a zone of possible agreement exists.
    pub zopa_exists: bool,
    /// The agreement zone `(low, high)` when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zopa_range: Option<(f64, f64)>,
    /// The Nash bargaining point inside the zone, when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nash_solution: Option<f64>,
}

/// Analyze the settlement position described by `state`.
///
/// The Nash bargaining point is the ZOPA midpoint under equal bargaining
/// power, or `plaintiff_batna + α * (defendant_batna - plaintiff_batna)`
/// when a plaintiff power weight α is supplied.
pub fn analyze_settlement(state: &BargainingState) -> BargainingAnalysis {
    let plaintiff_batna = state.plaintiff_batna();
    let defendant_batna = state.defendant_batna();
    let zopa_exists = plaintiff_batna < defendant_batna;

    let (zopa_range, nash_solution) = if zopa_exists {
        let alpha = state.plaintiff_power.unwrap_or(0.5);
        let solution = plaintiff_batna + alpha * (defendant_batna - plaintiff_batna);
        (Some((plaintiff_batna, defendant_batna)), Some(solution))
    } else {
        (None, None)
    };

    BargainingAnalysis {
        plaintiff_batna,
        defendant_batna,
        zopa_exists,
        zopa_range,
        nash_solution,
    }
}

/// Errors raised when validating a [`BargainingState`].
#[derive(Debug, Clone, PartialEq)]
pub enum BargainError {
    /// A monetary field holds NaN or an infinity.
    NonFiniteValue {
        /// Name of the offending field.
        field: &'static str,
        /// The non-finite value found.
        value: f64,
    },
    /// A probability or power weight lies outside [0, 1].
    ProbabilityOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The out-of-range value found.
        value: f64,
    },
}

impl std::fmt::Display for BargainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BargainError::NonFiniteValue { field, value } => {
                write!(f, "{} is not finite: {}", field, value)
            }
            BargainError::ProbabilityOutOfRange { field, value } => {
                write!(f, "{} must lie in [0, 1], got {}", field, value)
            }
        }
    }
}

impl std::error::Error for BargainError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(win_probability: f64, judgment: f64, costs_p: f64, costs_d: f64) -> BargainingState {
        BargainingState {
            plaintiff_demand: 100_000.0,
            defendant_offer: 50_000.0,
            win_probability,
            expected_judgment: judgment,
            trial_costs_plaintiff: costs_p,
            trial_costs_defendant: costs_d,
            plaintiff_power: None,
        }
        .validated()
        .unwrap()
    }

    #[test]
    fn test_zopa_midpoint() {
        // plaintiff_batna = 0.5 * 120k - 20k = 40k
        // defendant_batna = 0.5 * 120k + 20k = 80k
        let analysis = analyze_settlement(&state(0.5, 120_000.0, 20_000.0, 20_000.0));

        assert_eq!(analysis.plaintiff_batna, 40_000.0);
        assert_eq!(analysis.defendant_batna, 80_000.0);
        assert!(analysis.zopa_exists);
        assert_eq!(analysis.zopa_range, Some((40_000.0, 80_000.0)));
        assert_eq!(analysis.nash_solution, Some(60_000.0));
    }

    #[test]
    fn test_no_zopa_without_trial_costs_gap() {
        // Zero trial costs on both sides: BATNAs coincide, no zone.
        let analysis = analyze_settlement(&state(0.5, 100_000.0, 0.0, 0.0));

        assert!(!analysis.zopa_exists);
        assert!(analysis.zopa_range.is_none());
        assert!(analysis.nash_solution.is_none());
    }

    #[test]
    fn test_no_zopa_serializes_without_solution_fields() {
        let analysis = analyze_settlement(&state(0.5, 100_000.0, 0.0, 0.0));
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["zopa_exists"], serde_json::json!(false));
        assert!(json.get("nash_solution").is_none());
        assert!(json.get("zopa_range").is_none());
    }

    #[test]
    fn test_bargaining_power_shifts_solution() {
        let mut s = state(0.5, 120_000.0, 20_000.0, 20_000.0);
        s.plaintiff_power = Some(0.75);
        let analysis = analyze_settlement(&s);

        // 40k + 0.75 * (80k - 40k) = 70k
        assert_eq!(analysis.nash_solution, Some(70_000.0));
    }

    #[test]
    fn test_validation_rejects_bad_probability() {
        let err = BargainingState {
            win_probability: 1.5,
            ..state(0.5, 1.0, 0.0, 0.0)
        }
        .validated()
        .unwrap_err();

        assert!(matches!(
            err,
            BargainError::ProbabilityOutOfRange { field: "win_probability", .. }
        ));
    }

    #[test]
    fn test_validation_rejects_non_finite_amount() {
        let err = BargainingState {
            expected_judgment: f64::NAN,
            ..state(0.5, 1.0, 0.0, 0.0)
        }
        .validated()
        .unwrap_err();

        assert!(matches!(
            err,
            BargainError::NonFiniteValue { field: "expected_judgment", .. }
        ));
    }

    #[test]
    fn test_validation_rejects_bad_power_weight() {
        let err = BargainingState {
            plaintiff_power: Some(-0.1),
            ..state(0.5, 1.0, 0.0, 0.0)
        }
        .validated()
        .unwrap_err();

        assert!(matches!(
            err,
            BargainError::ProbabilityOutOfRange { field: "plaintiff_power", .. }
        ));
    }
}
