//! Mock delay implementation for testing
//!
//! Records requested waits instead of sleeping, so tests can assert that a
//! driver honors the datasheet settling times without slowing the suite down.

use crate::platform::traits::DelayProvider;
use core::cell::RefCell;
use std::vec::Vec;

/// Mock delay provider
#[derive(Debug, Default)]
pub struct MockDelay {
    delays_us: RefCell<Vec<u32>>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded delays, in microseconds, in request order
    pub fn delays_us(&self) -> Vec<u32> {
        self.delays_us.borrow().clone()
    }

    /// Total recorded delay in microseconds
    pub fn total_us(&self) -> u64 {
        self.delays_us.borrow().iter().map(|&us| us as u64).sum()
    }

    /// Clear recorded delays
    pub fn clear(&mut self) {
        self.delays_us.borrow_mut().clear();
    }
}

impl DelayProvider for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.delays_us.borrow_mut().push(us);
    }
}
