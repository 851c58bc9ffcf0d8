//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate provider calls and summarization into use-case level APIs.
//! - Keep session/FFI layers decoupled from data-source details.

pub mod dashboard_service;
