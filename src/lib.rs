//! # Talos
//!
//! Talos is competition code for a VEX V5 High Stakes robot built on
//! [Vexide](https://vexide.dev). The robot runs a differential drivetrain,
//! a mobile-goal clamp, a wall-stake scoring arm ("ladybrown"), a ring
//! intake, and a rush mechanism.
//!
//! Motion control during autonomous is handled by
//! [`evian`](https://github.com/vexide/evian); this crate only supplies the
//! tuned gains, the routine scripts, and the mechanism state machines.
//!
//! ## Modules
//!
//! - [`hardware`]: Device configuration, drivetrain tuning, and the
//!   competition lifecycle.
//! - [`subsystems`]: The clamp, ladybrown, and intake controllers.
//! - [`opcontrol`]: The driver-control poll loop and controller mapping
//!   utilities.
//! - [`auton`]: Autonomous routines and the route selector.
//! - [`fs`]: File-based logging to the SD card.

/// Autonomous routines and route selection.
///
/// Routines are linear scripts over the evian chassis: sequential drive and
/// turn motions with clamp, intake, and arm actions in between. The selected
/// [`Route`](auton::Route) is cycled with the controller arrows while the
/// robot is disabled.
pub mod auton;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Device configuration and competition lifecycle.
///
/// Owns the [`Robot`](hardware::Robot) struct, the port map, and the tuned
/// PID and tolerance table handed to evian's motion structs.
pub mod hardware;

/// Operator control utilities module.
///
/// Contains the driver-control poll loop and utilities for mapping
/// controller buttons to motors and ADI devices.
pub mod opcontrol;

/// Mechanism controllers.
///
/// Each subsystem owns its devices and its state. The state machines are
/// pure functions over `(state, sensor, input)` so they can be tested
/// without hardware.
pub mod subsystems;
