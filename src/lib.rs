//! # Litigation Solver
//!
//! A game-theoretic strategy engine for litigation analysis: models a
//! legal dispute as a two-player normal-form game, computes equilibrium
//! strategies and bargaining ranges, and re-evaluates its output as new
//! case events arrive.
//!
//! ## Features
//!
//! - **Pure-Strategy Equilibria**: full enumeration over arbitrary m×n games
//! - **Mixed-Strategy Solver**: exact 2×2 closed form, support enumeration beyond
//! - **Bargaining Analysis**: BATNA, ZOPA, and the Nash bargaining point
//! - **Strategy Scoring**: precedent and judge priors folded into rankings
//! - **Event-Driven Recalculation**: docket filings re-derive the optimal strategy
//!
//! ## Quick Start
//!
//! ```
//! use litigation_solver::game::{analyze, PayoffMatrix, SolverConfig};
//!
//! // Prisoner's Dilemma
//! let matrix = PayoffMatrix::build(
//!     vec![vec![3.0, 0.0], vec![5.0, 1.0]],
//!     vec![vec![3.0, 5.0], vec![0.0, 1.0]],
//! ).unwrap();
//!
//! let analysis = analyze(&matrix, &SolverConfig::default());
//! assert_eq!(analysis.pure_equilibria.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`game`]: payoff matrices and equilibrium solving
//! - [`settlement`]: bargaining ranges and strategy scoring
//! - [`docket`]: case events, parameter storage, and recalculation
//! - [`request`]: wire-facing request/response shapes
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    request (boundary)                    │
//! │   either-encoding matrices · settlement fields · events  │
//! └──────────────────────────────────────────────────────────┘
//!          │                    │                   │
//!          ▼                    ▼                   ▼
//!    ┌───────────┐       ┌────────────┐      ┌───────────┐
//!    │   game    │       │ settlement │      │  docket   │
//!    │ pure/mixed│       │ BATNA/ZOPA │      │ trigger + │
//!    │  solvers  │       │  + scorer  │      │   store   │
//!    └───────────┘       └────────────┘      └───────────┘
//! ```
//!
//! Every computation is a synchronous pure function over immutable
//! inputs, except the docket trigger's single serialized write to its
//! parameter store.

#![warn(missing_docs)]

pub mod docket;
pub mod game;
pub mod request;
pub mod settlement;

// Re-export commonly used types at crate root for convenience
pub use docket::{CaseEvent, GameParameters, InMemoryStore, OptimalStrategy, RecalculationTrigger};
pub use game::{analyze, EquilibriumAnalysis, PayoffMatrix, SolverConfig};
pub use settlement::{analyze_settlement, score_strategies, BargainingState, StrategyPriors};
