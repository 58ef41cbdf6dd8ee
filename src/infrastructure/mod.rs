//! # Infrastructure Layer
//!
//! Adapters for persistence and the external lookup collaborators.

pub mod clients;
pub mod persistence;
