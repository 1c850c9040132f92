//! Mock platform implementations for testing
//!
//! These mocks let the driver layer run on the host: the mock bus records
//! every transaction for verification and replays pre-programmed read data,
//! the mock delay records requested waits instead of sleeping.

pub mod delay;
pub mod i2c;

pub use delay::MockDelay;
pub use i2c::{I2cTransaction, MockI2c};
