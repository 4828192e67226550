//! Configuration Management
//!
//! This module handles loading runtime configuration from the environment.

pub mod analyzer;

// Re-export
pub use analyzer::AnalyzerConfig;
