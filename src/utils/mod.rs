//! Utility modules: JSON persistence and logger setup.

pub mod logging;
pub mod persistence;
