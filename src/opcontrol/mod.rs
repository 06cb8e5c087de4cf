//! Operator control for the driver period.
//!
//! One fixed-period poll loop drives everything: each tick reads the
//! controller once, forwards arcade drive to the chassis model, runs the
//! held-button mappings, evaluates the mechanism state machines against
//! their live sensors, and dispatches edge-triggered commands. All device
//! reads and writes for a tick happen before the loop sleeps; the only
//! suspension inside a tick is the clamp's feedback settle delay on a
//! toggle edge.

/// Controller input mapping utilities.
///
/// Provides [`ControllerControl`](controller::ControllerControl) for
/// mapping buttons to motors and ADI devices.
pub mod controller;

use log::warn;
use vexide::{controller::ControllerState, prelude::*};

use crate::{
    hardware::Robot,
    opcontrol::controller::{ControllerButton, ControllerControl},
    subsystems::{intake::Intake, ladybrown::ArmInput},
};

/// Runs the driver-control loop until the competition switch leaves driver
/// mode.
///
/// Bindings:
///
/// - Sticks: split arcade (left throttle, right steer).
/// - `R2`/`R1`: intake forward/reverse.
/// - `L1`/`L2`: manual arm raise/lower (held).
/// - `Down`: cycle the arm state; held in `Score`, it fires.
/// - `B`: toggle the clamp.
/// - `A`: toggle the rush mechanism.
pub async fn drive(robot: &mut Robot) {
    loop {
        let state = robot.controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        if let Err(e) = robot
            .drivetrain
            .model
            .drive_arcade(state.left_stick.y(), state.right_stick.x())
        {
            warn!("Drivetrain Error: {}", e);
        }

        let control = ControllerControl::from_state(state);
        control.dual_button_to_motor_velocity(
            ControllerButton::ButtonR2,
            ControllerButton::ButtonR1,
            heapless::Vec::from_array([robot.intake.motor_mut()]),
            Intake::TELEOP_RPM,
            -Intake::TELEOP_RPM,
            0,
        );
        control.button_to_adi_toggle(
            ControllerButton::ButtonA,
            heapless::Vec::from_array([&mut robot.rush]),
        );

        robot.ladybrown.update(ArmInput {
            raise: state.button_l1.is_pressed(),
            lower: state.button_l2.is_pressed(),
            fire:  state.button_down.is_pressed(),
        });
        if state.button_down.is_now_pressed() {
            robot.ladybrown.advance();
        }

        if state.button_b.is_now_pressed() {
            robot.clamp.toggle(&mut robot.controller).await;
        }

        sleep(Controller::UPDATE_INTERVAL).await;
    }
}
