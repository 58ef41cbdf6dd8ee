//! # PostgreSQL Repositories
//!
//! PostgreSQL-backed implementation of the persistence port.

pub mod car_repository;

pub use car_repository::PostgresCarRepository;
