//! Delay provider trait
//!
//! The sensors on the board offer no interrupt or ready-signal line, so every
//! measurement is "trigger, wait the datasheet settling time, fetch". The
//! waits are blocking by design; a triggered measurement should either be
//! allowed to complete or the device power-cycled.

/// Blocking delay provider
///
/// Platform implementations must provide busy or sleeping waits with at least
/// the requested duration. Waiting longer is always safe.
pub trait DelayProvider {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1000));
    }
}
