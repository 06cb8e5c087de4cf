//! Filesystem utilities for the V5 Brain.
//!
//! Match logs are the only way to debug field-only failures, so the robot
//! writes everything it logs to the SD card as well as the console.
//!
//! # Example
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use talos::fs::logger;
//!
//! logger::init(LevelFilter::Debug).expect("failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// File-based logging for the V5 Brain.
///
/// Provides a logger implementation that writes to both the console and a
/// file on the SD card.
pub mod logger;
