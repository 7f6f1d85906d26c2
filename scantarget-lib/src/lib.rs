// Demo operation modules
pub mod config;
pub mod eval;
pub mod record;
pub mod scoring;
