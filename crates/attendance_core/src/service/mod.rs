//! Core use-case services.
//!
//! # Responsibility
//! - Own roster state and apply mutations with validation.
//! - Orchestrate persistence and autosave around the store.
//! - Project store state into view rows.

pub mod report_service;
pub mod roster_service;
pub mod session_service;
