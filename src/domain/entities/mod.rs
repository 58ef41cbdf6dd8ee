//! # Domain Entities
//!
//! Entities representing core business concepts.
//!
//! - [`Car`]: the vehicle listing, combining authoritative stored fields
//!   with transient derived enrichment

pub mod car;

pub use car::Car;
