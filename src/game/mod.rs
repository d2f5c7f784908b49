//! Two-player normal-form game core.
//!
//! This is the algorithmic heart of the engine: payoff matrix validation,
//! pure-strategy equilibrium enumeration, and mixed-strategy solving
//! (exact for 2×2, support enumeration for larger games).

pub mod analysis;
pub mod config;
pub mod matrix;
pub mod mixed;
pub mod pure;

pub use analysis::{analyze, EquilibriumAnalysis};
pub use config::{ConfigError, SolverConfig};
pub use matrix::{MatrixError, PayoffMatrix};
pub use mixed::{find_mixed_equilibrium, MixedEquilibrium};
pub use pure::{find_pure_equilibria, PureEquilibrium};
