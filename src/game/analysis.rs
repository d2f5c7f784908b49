//! Full equilibrium analysis of a payoff matrix.
//!
//! Runs the pure finder and the mixed solver and assembles their output
//! into the wire-facing [`EquilibriumAnalysis`] shape. "Nothing found" is
//! always a valid result carried in the `notes` field, never an error.

use serde::{Deserialize, Serialize};

use crate::game::config::SolverConfig;
use crate::game::matrix::PayoffMatrix;
use crate::game::mixed::{find_mixed_equilibrium, MixedEquilibrium};
use crate::game::pure::{find_pure_equilibria, PureEquilibrium};

/// Complete equilibrium analysis for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumAnalysis {
    /// All pure-strategy equilibria (may be empty).
    pub pure_equilibria: Vec<PureEquilibrium>,
    /// The mixed equilibrium, if one was found (at most one entry).
    pub mixed_equilibria: Vec<MixedEquilibrium>,
    /// Explanatory note when a solver path produced nothing.
    pub notes: String,
}

/// Analyze a game: enumerate pure equilibria and solve for a mixed one.
pub fn analyze(matrix: &PayoffMatrix, config: &SolverConfig) -> EquilibriumAnalysis {
    let pure_equilibria = find_pure_equilibria(matrix);
    let mixed = find_mixed_equilibrium(matrix, config);

    let mut notes = Vec::new();
    if mixed.is_none() {
        let (m, n) = matrix.shape();
        if (m, n) != (2, 2) && !config.support_enumeration {
            notes.push(
                "Mixed-strategy solver configured for 2x2 games only; \
                 pure-strategy equilibria enumerated."
                    .to_string(),
            );
        } else {
            notes.push("No mixed-strategy equilibrium found for this game.".to_string());
        }
    }
    if pure_equilibria.is_empty() {
        notes.push("No pure-strategy equilibrium exists for this game.".to_string());
    }

    EquilibriumAnalysis {
        pure_equilibria,
        mixed_equilibria: mixed.into_iter().collect(),
        notes: notes.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prisoners_dilemma_analysis() {
        let matrix = PayoffMatrix::build(
            vec![vec![3.0, 0.0], vec![5.0, 1.0]],
            vec![vec![3.0, 5.0], vec![0.0, 1.0]],
        )
        .unwrap();

        let analysis = analyze(&matrix, &SolverConfig::default());
        assert_eq!(analysis.pure_equilibria.len(), 1);
        assert!(analysis.mixed_equilibria.is_empty());
        assert!(analysis.notes.contains("No mixed-strategy equilibrium"));
    }

    #[test]
    fn test_matching_pennies_analysis() {
        let matrix = PayoffMatrix::build(
            vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
            vec![vec![-1.0, 1.0], vec![1.0, -1.0]],
        )
        .unwrap();

        let analysis = analyze(&matrix, &SolverConfig::default());
        assert!(analysis.pure_equilibria.is_empty());
        assert_eq!(analysis.mixed_equilibria.len(), 1);
        assert!(analysis.notes.contains("No pure-strategy equilibrium"));
    }

    #[test]
    fn test_unsupported_shape_note_when_general_path_disabled() {
        let matrix = PayoffMatrix::build(
            vec![vec![1.0, 2.0, 3.0]],
            vec![vec![3.0, 2.0, 1.0]],
        )
        .unwrap();

        let analysis = analyze(&matrix, &SolverConfig::closed_form_only());
        assert!(analysis.mixed_equilibria.is_empty());
        assert!(analysis.notes.contains("2x2 games only"));
    }

    #[test]
    fn test_notes_empty_when_both_solvers_succeed() {
        // Battle of the Sexes has two pure equilibria and an interior mix.
        let matrix = PayoffMatrix::build(
            vec![vec![2.0, 0.0], vec![0.0, 1.0]],
            vec![vec![1.0, 0.0], vec![0.0, 2.0]],
        )
        .unwrap();

        let analysis = analyze(&matrix, &SolverConfig::default());
        assert_eq!(analysis.pure_equilibria.len(), 2);
        assert_eq!(analysis.mixed_equilibria.len(), 1);
        assert!(analysis.notes.is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let matrix = PayoffMatrix::build(vec![vec![1.0]], vec![vec![1.0]]).unwrap();
        let analysis = analyze(&matrix, &SolverConfig::default());
        let json = serde_json::to_value(&analysis).unwrap();

        assert!(json.get("pure_equilibria").is_some());
        assert!(json.get("mixed_equilibria").is_some());
        assert!(json.get("notes").is_some());
        let cell = &json["pure_equilibria"][0];
        assert!(cell.get("row").is_some());
        assert!(cell.get("p1_payoff").is_some());
    }
}
