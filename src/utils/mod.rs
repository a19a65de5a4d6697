//! Utility modules for common functionality

pub mod logger;
pub(crate) mod progress;
pub mod bit_utils;
