//! Cross-cutting helpers.

pub mod config;
