//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the I2C bus transport and
//! blocking delays. All platform-specific code is isolated to this module;
//! the device drivers only see the traits.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "linux")]
pub mod linux;

#[cfg(feature = "embedded-hal")]
pub mod hal;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{I2cError, PlatformError, Result};
pub use traits::{DelayProvider, I2cConfig, I2cInterface};
