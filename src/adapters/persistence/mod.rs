//! Directory implementations.

pub mod memory_directory;
pub mod sqlite_directory;

pub use memory_directory::MemoryDirectory;
pub use sqlite_directory::SqliteDirectory;
