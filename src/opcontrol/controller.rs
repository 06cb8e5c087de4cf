//! Controller input mapping for operator control.
//!
//! Utilities for mapping controller buttons to motors and ADI digital
//! outputs during the driver-control period:
//!
//! - **Toggle controls**: An edge-gated press toggles a device.
//! - **Dual-button controls**: Two held buttons drive a motor forward or
//!   reverse, with an idle velocity when neither is held.
//!
//! # Example
//!
//! ```ignore
//! use talos::opcontrol::controller::{ControllerButton, ControllerControl};
//!
//! let control = ControllerControl::new(&controller);
//!
//! // R2/R1 run the intake forward/reverse at 600 rpm.
//! control.dual_button_to_motor_velocity(
//!     ControllerButton::ButtonR2,
//!     ControllerButton::ButtonR1,
//!     heapless::Vec::from_array([&mut intake]),
//!     600,
//!     -600,
//!     0,
//! );
//! ```

use heapless::Vec;
use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::{AdiDigitalOut, Controller, Motor},
};

/// A controller button, for naming bindings in mapping calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

/// Controller input mapper for operator control.
///
/// Captures one tick's controller state; build it once per loop iteration
/// and feed it every mapping so edge queries all observe the same poll.
pub struct ControllerControl {
    /// The state of all buttons and sticks for this tick.
    state: ControllerState,
}

impl ControllerControl {
    /// Reads the controller and captures its state for this tick.
    ///
    /// A read failure is logged and treated as a released controller.
    pub fn new(controller: &Controller) -> Self {
        Self {
            state: get_state(controller),
        }
    }

    /// Wraps a state the caller already polled this tick.
    ///
    /// Prefer this in a loop that also reads sticks directly, so the
    /// controller is only polled once per tick and press edges are not
    /// consumed twice.
    pub const fn from_state(state: ControllerState) -> Self { Self { state } }

    /// Toggles one or more ADI devices when `button` is pressed. Up to 8
    /// devices can share a binding.
    pub fn button_to_adi_toggle(
        &self,
        button: ControllerButton,
        adi_devices: Vec<&mut AdiDigitalOut, 8>,
    ) {
        if get_button_state(self.state, button).is_now_pressed() {
            for device in adi_devices {
                device.toggle().unwrap_or_else(|e| {
                    warn!("ADI Toggle Error: {}", e);
                });
            }
        }
    }

    /// Drives one or more motors from a held button pair: `button_fwd`
    /// commands `fwd_rpm`, `button_rev` commands `rev_rpm`, and neither
    /// commands `idle_rpm`. Up to 8 motors can share a binding.
    pub fn dual_button_to_motor_velocity(
        &self,
        button_fwd: ControllerButton,
        button_rev: ControllerButton,
        motors: Vec<&mut Motor, 8>,
        fwd_rpm: i32,
        rev_rpm: i32,
        idle_rpm: i32,
    ) {
        let fwd = get_button_state(self.state, button_fwd);
        let rev = get_button_state(self.state, button_rev);

        let rpm = if fwd.is_pressed() {
            fwd_rpm
        } else if rev.is_pressed() {
            rev_rpm
        } else {
            idle_rpm
        };

        for motor in motors {
            motor.set_velocity(rpm).unwrap_or_else(|e| {
                warn!("Motor Set Velocity Error: {}", e);
            });
        }
    }
}

fn get_button_state(state: ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}

fn get_state(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}
