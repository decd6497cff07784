//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by HTTP adapters into the application
//! - Outbound: Called by application into storage

pub mod inbound;
pub mod outbound;

pub use inbound::CommandPort;
pub use outbound::Directory;
