//! TCS34725 driver implementation

use super::config::{LuxCoefficients, Tcs34725Config};
use super::registers;
use crate::devices::codec::decode_le16;
use crate::devices::traits::{
    Capabilities, ColorReading, EnvironmentSensor, Measurement, SensorError,
};
use crate::platform::{DelayProvider, I2cInterface};

/// TCS34725 color/light driver
///
/// Construction runs the power-up sequence exactly once; afterwards the
/// device converts continuously and reads only fetch the latest counts.
pub struct Tcs34725Driver {
    config: Tcs34725Config,
}

impl Tcs34725Driver {
    /// Create and initialize a new TCS34725 driver
    ///
    /// Power-up sequence, in order: power on, wait 3 ms, enable the ADC,
    /// set integration time, set gain, wait 10 ms for the first conversion.
    pub fn new<B: I2cInterface, D: DelayProvider>(
        bus: &mut B,
        delay: &mut D,
        config: Tcs34725Config,
    ) -> Result<Self, SensorError> {
        let addr = config.address;

        write_register(bus, addr, registers::REG_ENABLE, registers::ENABLE_PON)?;
        delay.delay_ms(registers::POWER_ON_DELAY_MS);
        write_register(
            bus,
            addr,
            registers::REG_ENABLE,
            registers::ENABLE_PON | registers::ENABLE_AEN,
        )?;
        write_register(
            bus,
            addr,
            registers::REG_ATIME,
            config.integration_time.register_value(),
        )?;
        write_register(bus, addr, registers::REG_CONTROL, config.gain.register_value())?;
        delay.delay_ms(registers::SETTLE_DELAY_MS);

        crate::log_info!("TCS34725 initialized at {:#x}", config.address);
        Ok(Self { config })
    }

    /// Fetch one 16-bit little-endian channel
    fn read_channel<B: I2cInterface>(&self, bus: &mut B, reg: u8) -> Result<u16, SensorError> {
        let mut buf = [0u8; registers::CHANNEL_LEN];
        let n = bus
            .write_read(self.config.address, &[registers::COMMAND_BIT | reg], &mut buf)
            .map_err(SensorError::Bus)?;
        if n < registers::CHANNEL_LEN {
            return Err(SensorError::IncompleteSampleRead {
                expected: registers::CHANNEL_LEN,
                got: n,
            });
        }
        Ok(decode_le16(buf[0], buf[1]))
    }
}

/// Write a command-bit-prefixed control register during initialization
fn write_register<B: I2cInterface>(
    bus: &mut B,
    addr: u8,
    reg: u8,
    value: u8,
) -> Result<(), SensorError> {
    bus.write(addr, &[registers::COMMAND_BIT | reg, value])
        .map_err(SensorError::Configuration)
}

/// Estimate illuminance from the red and clear counts
///
/// Linear approximation, not a datasheet conversion; negative results clamp
/// to 0.
pub fn lux_estimate(red: u16, clear: u16, coefficients: &LuxCoefficients) -> f64 {
    let lux = coefficients.red * red as f64 + coefficients.clear * clear as f64;
    lux.max(0.0)
}

impl EnvironmentSensor for Tcs34725Driver {
    fn capabilities(&self) -> Capabilities {
        Capabilities::LIGHT
    }

    fn read<B: I2cInterface, D: DelayProvider>(
        &mut self,
        bus: &mut B,
        _delay: &mut D,
    ) -> Result<Measurement, SensorError> {
        let clear = self.read_channel(bus, registers::REG_CDATAL)?;
        let red = self.read_channel(bus, registers::REG_RDATAL)?;
        let green = self.read_channel(bus, registers::REG_GDATAL)?;
        let blue = self.read_channel(bus, registers::REG_BDATAL)?;

        Ok(Measurement {
            lux: Some(lux_estimate(red, clear, &self.config.lux_coefficients)),
            color: Some(ColorReading {
                clear,
                red,
                green,
                blue,
            }),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockDelay, MockI2c};

    fn initialized_driver(bus: &mut MockI2c, delay: &mut MockDelay) -> Tcs34725Driver {
        Tcs34725Driver::new(bus, delay, Tcs34725Config::default()).unwrap()
    }

    #[test]
    fn test_init_sequence_order() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        initialized_driver(&mut bus, &mut delay);

        let write = |reg: u8, value: u8| I2cTransaction::Write {
            addr: 0x29,
            data: vec![0x80 | reg, value],
        };
        assert_eq!(
            bus.transactions(),
            vec![
                write(0x00, 0x01), // power on
                write(0x00, 0x03), // power on + ADC enable
                write(0x01, 0xFF), // integration time 2.4 ms
                write(0x0F, 0x00), // gain x1
            ]
        );
        // 3 ms power-on wait, then 10 ms settle
        assert_eq!(delay.delays_us(), vec![3_000, 10_000]);
    }

    #[test]
    fn test_read_channels_little_endian() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        let mut driver = initialized_driver(&mut bus, &mut delay);

        // clear=500, red=100, green=80, blue=60
        bus.set_read_data(&[0xF4, 0x01, 0x64, 0x00, 0x50, 0x00, 0x3C, 0x00]);
        let m = driver.read(&mut bus, &mut delay).unwrap();

        let color = m.color.unwrap();
        assert_eq!(color.clear, 500);
        assert_eq!(color.red, 100);
        assert_eq!(color.green, 80);
        assert_eq!(color.blue, 60);
        // -0.32466*100 + 1.57837*500 = 756.719
        assert!((m.lux.unwrap() - 756.719).abs() < 0.001);
        assert_eq!(m.temperature_c, None);
    }

    #[test]
    fn test_read_uses_command_bit() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        let mut driver = initialized_driver(&mut bus, &mut delay);
        bus.clear_transactions();

        bus.set_read_data(&[0u8; 8]);
        driver.read(&mut bus, &mut delay).unwrap();

        let expected: Vec<_> = [0x14, 0x16, 0x18, 0x1A]
            .iter()
            .map(|&reg| I2cTransaction::WriteRead {
                addr: 0x29,
                write_data: vec![0x80 | reg],
                read_len: 2,
            })
            .collect();
        assert_eq!(bus.transactions(), expected);
    }

    #[test]
    fn test_lux_clamps_negative_to_zero() {
        let coefficients = LuxCoefficients::default();
        // red dominates: -0.32466*10000 + 1.57837*10 < 0
        assert_eq!(lux_estimate(10_000, 10, &coefficients), 0.0);
    }

    #[test]
    fn test_short_channel_read_is_typed_error() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        let mut driver = initialized_driver(&mut bus, &mut delay);

        bus.set_read_data(&[0xF4]); // one byte of the clear channel
        let result = driver.read(&mut bus, &mut delay);
        assert_eq!(
            result.err(),
            Some(SensorError::IncompleteSampleRead {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_capabilities() {
        let mut bus = MockI2c::default();
        let mut delay = MockDelay::new();
        let driver = initialized_driver(&mut bus, &mut delay);
        assert_eq!(driver.capabilities(), Capabilities::LIGHT);
    }
}
