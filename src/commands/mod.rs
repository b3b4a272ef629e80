//! CLI command implementations.

mod config;
mod generate;
mod scan;

pub use config::ConfigCmd;
pub use generate::GenerateCmd;
pub use scan::ScanCmd;
