//! Thread-sleep delay provider for hosted targets

use crate::platform::traits::DelayProvider;
use std::thread;
use std::time::Duration;

/// Delay provider backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayProvider for StdDelay {
    fn delay_us(&mut self, us: u32) {
        thread::sleep(Duration::from_micros(us as u64));
    }
}
