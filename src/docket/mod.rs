//! Docket-event processing: case events, per-case parameters, storage,
//! and the recalculation trigger.

pub mod event;
pub mod params;
pub mod store;
pub mod trigger;

pub use event::CaseEvent;
pub use params::{GameParameters, OptimalStrategy};
pub use store::{InMemoryStore, ParameterStore};
pub use trigger::{Recalculation, RecalculationTrigger, TriggerError};
