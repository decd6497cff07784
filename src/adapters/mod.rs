//! Infrastructure adapters. Implement ports.
//!
//! Storage backends and HTTP surfaces. Map errors to DomainError.

pub mod http;
pub mod persistence;
