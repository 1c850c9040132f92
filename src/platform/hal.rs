//! Adapters for embedded-hal 1.0 implementations
//!
//! Wraps any `embedded_hal::i2c::I2c` or `embedded_hal::delay::DelayNs`
//! implementation so it can back the platform traits. embedded-hal buses
//! either fill the whole buffer or fail, so short reads never surface here.

use crate::platform::{
    traits::{DelayProvider, I2cInterface},
    {I2cError, PlatformError, Result},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

/// embedded-hal I2C bus adapter
pub struct HalI2c<T>(pub T);

impl<T: I2c> I2cInterface for HalI2c<T> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.0
            .write(addr, data)
            .map_err(|_| PlatformError::I2c(I2cError::BusError))
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<usize> {
        self.0
            .read(addr, buffer)
            .map_err(|_| PlatformError::I2c(I2cError::BusError))?;
        Ok(buffer.len())
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> Result<usize> {
        self.0
            .write_read(addr, write_data, read_buffer)
            .map_err(|_| PlatformError::I2c(I2cError::BusError))?;
        Ok(read_buffer.len())
    }
}

/// embedded-hal delay adapter
pub struct HalDelay<T>(pub T);

impl<T: DelayNs> DelayProvider for HalDelay<T> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
