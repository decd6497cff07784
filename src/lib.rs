//! meet-library: team-scoped alias directory for meeting rooms, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
