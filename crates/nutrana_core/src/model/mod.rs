//! Domain model for dashboard and meal-plan projections.
//!
//! # Responsibility
//! - Define the value types exchanged with the presentation layer.
//! - Keep meal-type keys total: unknown keys are carried, never rejected.
//!
//! # Invariants
//! - Every record is call-scoped and never persisted by core.

pub mod meal;
pub mod nutrition;
