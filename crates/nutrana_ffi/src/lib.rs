//! Flutter bridge surface for Nutrana core.

pub mod api;
