//! Common test utilities for rastergeom.
//!
//! This module provides shared utilities for testing rastergeom end to end.

// Re-export all common test utilities
pub mod assertions;
pub mod test_data;
