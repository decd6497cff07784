//! Application use cases. Orchestrate domain logic via ports.

pub mod command_parser;
pub mod resolution_service;

pub use command_parser::parse_command;
pub use resolution_service::ResolutionService;
