//! I2C implementation for Linux (Raspberry Pi) via rppal

use crate::platform::{
    traits::I2cInterface,
    {I2cError, PlatformError, Result},
};
use rppal::i2c::I2c;

/// I2C bus handle backed by `/dev/i2c-<bus>`
///
/// The kernel driver serializes individual transactions, but sensor protocols
/// span multiple transactions; callers must still ensure only one context
/// uses the bus at a time.
pub struct LinuxI2c {
    bus: I2c,
}

impl LinuxI2c {
    /// Open the default I2C bus (bus 1 on a Raspberry Pi)
    pub fn new() -> Result<Self> {
        let bus = I2c::new().map_err(|_| PlatformError::InitializationFailed)?;
        Ok(Self { bus })
    }

    /// Open a specific I2C bus
    pub fn with_bus(bus_id: u8) -> Result<Self> {
        let bus = I2c::with_bus(bus_id).map_err(|_| PlatformError::InitializationFailed)?;
        Ok(Self { bus })
    }

    fn select(&mut self, addr: u8) -> Result<()> {
        self.bus.set_slave_address(addr as u16).map_err(map_error)
    }
}

impl I2cInterface for LinuxI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.select(addr)?;
        self.bus.write(data).map_err(map_error)?;
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<usize> {
        self.select(addr)?;
        self.bus.read(buffer).map_err(map_error)
    }

    fn write_read(
        &mut self,
        addr: u8,
        write_data: &[u8],
        read_buffer: &mut [u8],
    ) -> Result<usize> {
        self.select(addr)?;
        self.bus
            .write_read(write_data, read_buffer)
            .map_err(map_error)?;
        Ok(read_buffer.len())
    }
}

fn map_error(e: rppal::i2c::Error) -> PlatformError {
    match e {
        rppal::i2c::Error::InvalidSlaveAddress(_) => {
            PlatformError::I2c(I2cError::InvalidAddress)
        }
        _ => PlatformError::I2c(I2cError::BusError),
    }
}
