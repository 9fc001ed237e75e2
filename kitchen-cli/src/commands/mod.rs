//! Command implementations for the kitchen CLI

pub mod init_db;
pub mod list;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use init_db::run_init_db;
pub use list::run_list;
pub use serve::run_serve;
