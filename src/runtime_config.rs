//! # Runtime Configuration Module
//!
//! The runtime configuration module provides environment variable-based
//! configuration for the console's runtime behavior.
//!
//! ## Environment Variables
//!
//! ### `BRRTCON_STACK_SIZE`
//!
//! Sets the stack size for the dispatcher coroutine. Accepts values in:
//! - Decimal: `16384` (16 KB)
//! - Hexadecimal: `0x4000` (16 KB)
//!
//! Default: `0x4000` (16 KB)
//!
//! **Why this matters:**
//! - The dispatch loop itself is shallow; the stack mostly serves the
//!   command handlers it invokes
//! - Too small causes coroutine stack overflows in deep handlers; too large
//!   wastes memory on hosts running many coroutines
//!
//! ## Usage
//!
//! ```rust
//! use brrtconsole::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("Stack size: {} bytes", config.stack_size);
//! ```

use std::env;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup using [`RuntimeConfig::from_env()`] to configure
/// the coroutine runtime behavior.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for the dispatcher coroutine in bytes
    /// (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = match env::var("BRRTCON_STACK_SIZE") {
            Ok(val) => {
                if let Some(hex) = val.strip_prefix("0x") {
                    usize::from_str_radix(hex, 16).unwrap_or(0x4000)
                } else {
                    val.parse().unwrap_or(0x4000)
                }
            }
            Err(_) => 0x4000,
        };
        RuntimeConfig { stack_size }
    }
}
