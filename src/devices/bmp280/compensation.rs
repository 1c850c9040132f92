//! BMP280 compensation algorithm
//!
//! Double-precision compensation from the Bosch datasheet (section 3.11.3,
//! "Compensation formula"). The operation order is kept exactly as published;
//! rearranging it changes the floating-point result.

use super::calibration::CalibrationParams;

/// Temperature result carrying the fine-resolution intermediate
///
/// `t_fine` feeds the pressure compensation and must come from the same
/// measurement cycle as the pressure sample.
#[derive(Debug, Clone, Copy)]
pub struct CompensatedTemperature {
    /// Temperature in °C
    pub celsius: f64,
    /// Fine-resolution temperature used by the pressure compensation
    pub t_fine: f64,
}

/// Compensate a raw 20-bit temperature ADC value
pub fn compensate_temperature(adc_t: u32, cal: &CalibrationParams) -> CompensatedTemperature {
    let adc_t = adc_t as f64;
    let t1 = cal.t1 as f64;

    let var1 = (adc_t / 16384.0 - t1 / 1024.0) * cal.t2 as f64;
    let var2 = {
        let d = adc_t / 131072.0 - t1 / 8192.0;
        d * d * cal.t3 as f64
    };
    let t_fine = var1 + var2;

    CompensatedTemperature {
        celsius: t_fine / 5120.0,
        t_fine,
    }
}

/// Compensate a raw 20-bit pressure ADC value, in hPa
///
/// `t_fine` comes from [`compensate_temperature`]. When the intermediate
/// divisor collapses to zero (all-zero calibration, datasheet guard) the
/// result is 0.0 rather than a division by zero.
pub fn compensate_pressure(adc_p: u32, t_fine: f64, cal: &CalibrationParams) -> f64 {
    let mut var1 = t_fine / 2.0 - 64000.0;
    let mut var2 = var1 * var1 * cal.p6 as f64 / 32768.0;
    var2 += var1 * cal.p5 as f64 * 2.0;
    var2 = var2 / 4.0 + cal.p4 as f64 * 65536.0;
    var1 = (cal.p3 as f64 * var1 * var1 / 524288.0 + cal.p2 as f64 * var1) / 524288.0;
    var1 = (1.0 + var1 / 32768.0) * cal.p1 as f64;

    if var1 == 0.0 {
        return 0.0;
    }

    let mut p = 1048576.0 - adc_p as f64;
    p = (p - var2 / 4096.0) * 6250.0 / var1;
    var1 = cal.p9 as f64 * p * p / 2147483648.0;
    var2 = p * cal.p8 as f64 / 32768.0;
    p += (var1 + var2 + cal.p7 as f64) / 16.0;

    // Pa to hPa
    p / 100.0
}
