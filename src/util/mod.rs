//! Utility functions and helpers
//!
//! ## Modules
//!
//! - [`retry`] - Retry logic for resilient backend requests
//! - [`util`] - Timing and human readable number formatting
//!
//! [`util`]: self::util

pub mod retry;
pub mod util;
