//! Case events from the docket feed.
//!
//! A [`CaseEvent`] is an immutable record of a court filing. The trigger
//! only recalculates for filing types on a fixed significance list;
//! everything else is plain notification traffic handled elsewhere.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Filing types that materially change case strategy.
///
/// Matched by substring against the normalized filing type, so variants
/// like "Motion for Summary Judgment (renewed)" still qualify.
const SIGNIFICANT_FILINGS: [&str; 10] = [
    "motion_for_summary_judgment",
    "motion_to_dismiss",
    "settlement_offer",
    "expert_report",
    "deposition_transcript",
    "order",
    "ruling",
    "verdict",
    "damages_calculation",
    "amended_complaint",
];

/// An immutable record of a new court filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEvent {
    /// The filing type as reported by the docket feed.
    pub filing_type: String,
    /// Free-form filing details (movant, granted flag, amounts, ...).
    #[serde(default)]
    pub details: FxHashMap<String, Value>,
}

impl CaseEvent {
    /// Create an event with no details.
    pub fn new(filing_type: impl Into<String>) -> Self {
        Self {
            filing_type: filing_type.into(),
            details: FxHashMap::default(),
        }
    }

    /// Builder method: attach a detail value.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Filing type lowercased with whitespace collapsed to underscores.
    pub fn normalized_filing_type(&self) -> String {
        self.filing_type
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Whether this filing warrants a strategy recalculation.
    pub fn is_significant(&self) -> bool {
        let normalized = self.normalized_filing_type();
        SIGNIFICANT_FILINGS.iter().any(|sf| normalized.contains(sf))
    }

    /// A numeric detail value, if present and numeric.
    pub fn detail_f64(&self, key: &str) -> Option<f64> {
        self.details.get(key).and_then(Value::as_f64)
    }

    /// A string detail value, if present and a string.
    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(Value::as_str)
    }

    /// A boolean detail value; absent or non-boolean reads as false.
    pub fn detail_bool(&self, key: &str) -> bool {
        self.details
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
