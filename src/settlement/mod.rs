//! Settlement analysis: bargaining-range computation and strategy scoring.

pub mod bargain;
pub mod scorer;

pub use bargain::{analyze_settlement, BargainError, BargainingAnalysis, BargainingState};
pub use scorer::{score_strategies, StrategyPriors, StrategyScore};
