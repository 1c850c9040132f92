//! Core infrastructure
//!
//! This module contains components shared by all drivers, currently the
//! logging abstraction.

pub mod logging;
