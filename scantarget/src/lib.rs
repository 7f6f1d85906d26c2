// CLI support modules
pub mod logging;
pub mod output;
