//! Session gating for dashboard computation.
//!
//! # Responsibility
//! - Carry authentication-state notifications into core.
//! - Gate dashboard loading behind a present principal.
//!
//! # Invariants
//! - Event delivery is single-threaded; callbacks run to completion.

pub mod auth;
pub mod gate;
