//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the catalog or saved search storage.

pub mod browse;
pub mod completions;
pub mod config;
pub mod favorites;
pub mod saved;
pub mod search;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use completions::execute as completions;
pub use config::execute as config;
pub use favorites::execute as favorites;
pub use saved::execute as saved;
pub use search::execute as search;
pub use show::execute as show;
