//! # Vehicles
//!
//! A small set of cooperating HTTP services for a vehicle listing
//! platform.
//!
//! The vehicles API exposes CRUD operations over [`Car`] resources and
//! enriches every car it returns with a current price (from the pricing
//! service) and a descriptive address (from the maps service). Enrichment
//! degrades gracefully: a failing or slow collaborator yields a sentinel
//! price or an absent address, never a failed request.
//!
//! # Architecture
//!
//! - [`domain`]: entities, value objects, and validation rules
//! - [`application`]: the [`CarAggregationService`] orchestrating
//!   persistence and enrichment
//! - [`infrastructure`]: the repository port and implementations, plus the
//!   lookup ports and their HTTP adapters
//! - [`api`]: the axum REST boundary
//! - [`pricing`], [`maps`]: the two collaborator services, each with its
//!   own binary
//!
//! All collaborators are taken as constructor parameters behind ports, so
//! tests substitute in-process fakes with no framework involved.
//!
//! [`Car`]: domain::entities::Car
//! [`CarAggregationService`]: application::services::CarAggregationService

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod maps;
pub mod pricing;
