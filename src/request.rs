//! Wire-facing request and response shapes.
//!
//! Callers may describe a game either as explicit per-player payoff
//! matrices or as a single grid of `[p1, p2]` cells. Both encodings are
//! resolved here, exactly once, into the internal [`PayoffMatrix`]
//! representation; everything downstream sees one type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::game::{
    analyze, ConfigError, EquilibriumAnalysis, MatrixError, PayoffMatrix, SolverConfig,
};
use crate::settlement::{analyze_settlement, BargainError, BargainingAnalysis, BargainingState};
use crate::docket::CaseEvent;

/// An equilibrium-analysis request in either wire encoding.
///
/// Exactly one encoding must be supplied: `payoff_matrix_p1` together
/// with `payoff_matrix_p2`, or `game_matrix` alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquilibriumRequest {
    /// Player 1's payoff grid (explicit encoding).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoff_matrix_p1: Option<Vec<Vec<f64>>>,
    /// Player 2's payoff grid (explicit encoding).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payoff_matrix_p2: Option<Vec<Vec<f64>>>,
    /// m×n grid of `[p1_payoff, p2_payoff]` cells (paired encoding).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_matrix: Option<Vec<Vec<Vec<f64>>>>,
    /// Opaque caller metadata, echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl EquilibriumRequest {
    /// Resolve the request into the internal matrix representation.
    pub fn resolve(&self) -> Result<PayoffMatrix, RequestError> {
        match (&self.payoff_matrix_p1, &self.payoff_matrix_p2, &self.game_matrix) {
            (Some(p1), Some(p2), _) => Ok(PayoffMatrix::build(p1.clone(), p2.clone())?),
            (_, _, Some(grid)) => {
                let mut cells = Vec::with_capacity(grid.len());
                for row in grid {
                    let mut cell_row = Vec::with_capacity(row.len());
                    for cell in row {
                        if cell.len() < 2 {
                            return Err(RequestError::InvalidInput(
                                "each game_matrix cell must be [p1_payoff, p2_payoff]"
                                    .to_string(),
                            ));
                        }
                        cell_row.push((cell[0], cell[1]));
                    }
                    cells.push(cell_row);
                }
                Ok(PayoffMatrix::build_from_cells(cells)?)
            }
            _ => Err(RequestError::InvalidInput(
                "provide payoff_matrix_p1/payoff_matrix_p2 or game_matrix".to_string(),
            )),
        }
    }
}

/// Response to an equilibrium-analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquilibriumResponse {
    /// The equilibrium analysis (`pure_equilibria`, `mixed_equilibria`, `notes`).
    #[serde(flatten)]
    pub analysis: EquilibriumAnalysis,
    /// The caller's metadata, echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Resolve and analyze an equilibrium request.
///
/// The solver configuration is validated here, at the boundary, so a
/// malformed caller-supplied config surfaces as a typed error instead of
/// skewing the numeric verification downstream.
pub fn run_equilibrium(
    request: &EquilibriumRequest,
    config: &SolverConfig,
) -> Result<EquilibriumResponse, RequestError> {
    config.validate()?;
    let matrix = request.resolve()?;
    Ok(EquilibriumResponse {
        analysis: analyze(&matrix, config),
        metadata: request.metadata.clone(),
    })
}

/// A settlement-analysis request carrying the bargaining state fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
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
    /// Optional plaintiff bargaining power in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plaintiff_power: Option<f64>,
}

impl SettlementRequest {
    /// Validate into a [`BargainingState`].
    pub fn resolve(&self) -> Result<BargainingState, RequestError> {
        Ok(BargainingState {
            plaintiff_demand: self.plaintiff_demand,
            defendant_offer: self.defendant_offer,
            win_probability: self.win_probability,
            expected_judgment: self.expected_judgment,
            trial_costs_plaintiff: self.trial_costs_plaintiff,
            trial_costs_defendant: self.trial_costs_defendant,
            plaintiff_power: self.plaintiff_power,
        }
        .validated()?)
    }
}

/// Resolve and analyze a settlement request.
pub fn run_settlement(request: &SettlementRequest) -> Result<BargainingAnalysis, RequestError> {
    Ok(analyze_settlement(&request.resolve()?))
}

/// A docket-event payload routed per case identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEventRequest {
    /// The case the filing belongs to.
    pub case_id: String,
    /// The filing event.
    #[serde(flatten)]
    pub event: CaseEvent,
}

/// Errors raised at the request boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The request shape is malformed (neither matrix encoding present,
    /// bad cell arity, ...).
    InvalidInput(String),
    /// The supplied matrices failed payoff-model validation.
    Matrix(MatrixError),
    /// The supplied bargaining state failed validation.
    Bargain(BargainError),
    /// The supplied solver configuration failed validation.
    Config(ConfigError),
}

impl From<MatrixError> for RequestError {
    fn from(err: MatrixError) -> Self {
        RequestError::Matrix(err)
    }
}

impl From<ConfigError> for RequestError {
    fn from(err: ConfigError) -> Self {
        RequestError::Config(err)
    }
}

impl From<BargainError> for RequestError {
    fn from(err: BargainError) -> Self {
        RequestError::Bargain(err)
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::InvalidInput(msg) => write!(f, "invalid request: {}", msg),
            RequestError::Matrix(err) => write!(f, "invalid payoff matrix: {}", err),
            RequestError::Bargain(err) => write!(f, "invalid bargaining state: {}", err),
            RequestError::Config(err) => write!(f, "invalid solver configuration: {}", err),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Matrix(err) => Some(err),
            RequestError::Bargain(err) => Some(err),
            RequestError::Config(err) => Some(err),
            RequestError::InvalidInput(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_matrices_encoding() {
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{
                "payoff_matrix_p1": [[3, 0], [5, 1]],
                "payoff_matrix_p2": [[3, 5], [0, 1]]
            }"#,
        )
        .unwrap();

        let matrix = request.resolve().unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.p1(1, 0), 5.0);
    }

    #[test]
    fn test_game_matrix_encoding() {
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{"game_matrix": [[[3, 3], [0, 5]], [[5, 0], [1, 1]]]}"#,
        )
        .unwrap();

        let matrix = request.resolve().unwrap();
        assert_eq!(matrix.p2(0, 1), 5.0);
    }

    #[test]
    fn test_missing_encodings_rejected() {
        let request = EquilibriumRequest::default();
        assert!(matches!(
            request.resolve(),
            Err(RequestError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_short_cell_rejected() {
        let request: EquilibriumRequest =
            serde_json::from_str(r#"{"game_matrix": [[[3]]]}"#).unwrap();
        assert!(matches!(
            request.resolve(),
            Err(RequestError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_matrices_rejected_at_boundary() {
        // Zero-row grids must be stopped by payoff-model validation; an
        // unvalidated matrix would panic on any shape access downstream.
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{"payoff_matrix_p1": [], "payoff_matrix_p2": []}"#,
        )
        .unwrap();

        assert_eq!(
            request.resolve(),
            Err(RequestError::Matrix(MatrixError::EmptyMatrix))
        );

        let request: EquilibriumRequest =
            serde_json::from_str(r#"{"game_matrix": []}"#).unwrap();
        assert_eq!(
            request.resolve(),
            Err(RequestError::Matrix(MatrixError::EmptyMatrix))
        );
    }

    #[test]
    fn test_invalid_config_rejected_at_boundary() {
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{"game_matrix": [[[3, 3], [0, 5]], [[5, 0], [1, 1]]]}"#,
        )
        .unwrap();

        let config = SolverConfig::default().with_probability_tolerance(f64::NAN);
        assert!(matches!(
            run_equilibrium(&request, &config),
            Err(RequestError::Config(_))
        ));
    }

    #[test]
    fn test_matrix_validation_surfaces() {
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{
                "payoff_matrix_p1": [[1, 2]],
                "payoff_matrix_p2": [[1], [2]]
            }"#,
        )
        .unwrap();

        assert!(matches!(request.resolve(), Err(RequestError::Matrix(_))));
    }

    #[test]
    fn test_run_equilibrium_echoes_metadata() {
        let request: EquilibriumRequest = serde_json::from_str(
            r#"{
                "game_matrix": [[[3, 3], [0, 5]], [[5, 0], [1, 1]]],
                "metadata": {"case_id": "case-1"}
            }"#,
        )
        .unwrap();

        let response = run_equilibrium(&request, &SolverConfig::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["metadata"]["case_id"], serde_json::json!("case-1"));
        assert_eq!(json["pure_equilibria"][0]["row"], serde_json::json!(1));
        assert!(json.get("notes").is_some());
    }

    #[test]
    fn test_run_settlement() {
        let request: SettlementRequest = serde_json::from_str(
            r#"{
                "plaintiff_demand": 100000,
                "defendant_offer": 50000,
                "win_probability": 0.5,
                "expected_judgment": 120000,
                "trial_costs_plaintiff": 20000,
                "trial_costs_defendant": 20000
            }"#,
        )
        .unwrap();

        let analysis = run_settlement(&request).unwrap();
        assert_eq!(analysis.nash_solution, Some(60_000.0));
    }

    #[test]
    fn test_run_settlement_validation_surfaces() {
        let request = SettlementRequest {
            plaintiff_demand: 0.0,
            defendant_offer: 0.0,
            win_probability: 2.0,
            expected_judgment: 0.0,
            trial_costs_plaintiff: 0.0,
            trial_costs_defendant: 0.0,
            plaintiff_power: None,
        };

        assert!(matches!(
            run_settlement(&request),
            Err(RequestError::Bargain(_))
        ));
    }

    #[test]
    fn test_case_event_request_flattens_event() {
        let request: CaseEventRequest = serde_json::from_str(
            r#"{
                "case_id": "case-1",
                "filing_type": "settlement_offer",
                "details": {"amount": 75000}
            }"#,
        )
        .unwrap();

        assert_eq!(request.case_id, "case-1");
        assert!(request.event.is_significant());
        assert_eq!(request.event.detail_f64("amount"), Some(75_000.0));
    }
}
