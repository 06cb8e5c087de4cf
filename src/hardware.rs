//! Device configuration and competition lifecycle.
//!
//! Everything port-specific lives here: the drivetrain motors, the
//! tracking setup, the mechanism devices, and the tuned gain and tolerance
//! table handed to evian's motion structs. The rest of the crate never
//! touches port numbers.

use std::time::Duration;

use evian::{
    control::loops::{AngularPid, Pid},
    drivetrain::model::Differential,
    motion::Basic,
    prelude::*,
};
use log::{info, warn};
use vexide::{controller::ControllerState, prelude::*};

use crate::{
    auton::{self, Route},
    opcontrol,
    subsystems::{clamp::Clamp, intake::Intake, ladybrown::Ladybrown},
};

/// Linear drive gains.
pub const LINEAR_PID: Pid = Pid::new(1.0, 0.0, 0.125, None);
/// Turning gains.
pub const ANGULAR_PID: AngularPid = AngularPid::new(16.0, 0.0, 1.0, None);

/// Exit conditions for linear motions.
pub const LINEAR_TOLERANCES: Tolerances = Tolerances::new()
    .error(1.0)
    .velocity(0.25)
    .duration(Duration::from_millis(250));
/// Exit conditions for turns.
pub const ANGULAR_TOLERANCES: Tolerances = Tolerances::new()
    .error(f64::to_radians(3.0))
    .velocity(0.09)
    .duration(Duration::from_millis(250));

/// Give-up timeout per motion, so a blocked robot moves on to the next
/// script step instead of pushing a wall for the whole period.
pub const MOTION_TIMEOUT: Duration = Duration::from_secs(5);

/// A freshly configured basic motion handle with the tuned table above.
#[must_use]
pub fn motion() -> Basic<Pid, AngularPid> {
    Basic {
        linear_controller:  LINEAR_PID,
        angular_controller: ANGULAR_PID,
        linear_tolerances:  LINEAR_TOLERANCES,
        angular_tolerances: ANGULAR_TOLERANCES,
        timeout:            Some(MOTION_TIMEOUT),
    }
}

/// Converts a speed cap on the familiar 0-127 scale to motor volts.
#[must_use]
pub fn volts(speed: f64) -> f64 { speed / 127.0 * Motor::MAX_VOLTAGE }

/// The assembled robot.
pub struct Robot {
    /// Drivetrain plus tracking, driven by evian.
    pub drivetrain: Drivetrain<Differential, WheeledTracking>,
    pub controller: Controller,
    pub intake:     Intake,
    pub ladybrown:  Ladybrown,
    pub clamp:      Clamp,
    /// Rush-mechanism piston, toggled directly from a button.
    pub rush:       AdiDigitalOut,
    /// The autonomous route picked while disabled.
    pub route:      Route,
}

impl Robot {
    /// Builds the robot from the brain's peripherals and calibrates the
    /// IMU. Calibration failures are logged and tracking falls back to
    /// wheels only.
    pub async fn new(peripherals: Peripherals) -> Self {
        let mut imu = InertialSensor::new(peripherals.port_17);
        if let Err(e) = imu.calibrate().await {
            warn!("IMU Calibration Error: {}", e);
        }

        let drivetrain = Drivetrain::new(
            Differential::new(
                [
                    Motor::new(peripherals.port_8, Gearset::Blue, Direction::Reverse),
                    Motor::new(peripherals.port_9, Gearset::Blue, Direction::Forward),
                    Motor::new(peripherals.port_10, Gearset::Blue, Direction::Reverse),
                ],
                [
                    Motor::new(peripherals.port_18, Gearset::Blue, Direction::Forward),
                    Motor::new(peripherals.port_19, Gearset::Blue, Direction::Reverse),
                    Motor::new(peripherals.port_20, Gearset::Blue, Direction::Forward),
                ],
            ),
            WheeledTracking::new(
                Vec2::default(),
                90.0.deg(),
                [TrackingWheel::new(
                    RotationSensor::new(peripherals.port_12, Direction::Forward),
                    2.0,
                    0.0,
                    None,
                )],
                [TrackingWheel::new(
                    RotationSensor::new(peripherals.port_13, Direction::Forward),
                    2.0,
                    0.0,
                    None,
                )],
                Some(imu),
            ),
        );

        Self {
            drivetrain,
            controller: peripherals.primary_controller,
            intake: Intake::new(Motor::new(
                peripherals.port_11,
                Gearset::Blue,
                Direction::Forward,
            )),
            ladybrown: Ladybrown::new(
                [
                    Motor::new(peripherals.port_16, Gearset::Green, Direction::Forward),
                    Motor::new(peripherals.port_15, Gearset::Green, Direction::Reverse),
                ],
                AdiAnalogIn::new(peripherals.adi_h),
            ),
            clamp: Clamp::new(
                AdiDigitalOut::new(peripherals.adi_a),
                AdiDigitalIn::new(peripherals.adi_g),
            ),
            rush: AdiDigitalOut::new(peripherals.adi_b),
            route: Route::default(),
        }
    }

    fn show_route(&mut self) {
        info!("Route selected: {}", self.route.name().trim_end());
        self.controller
            .screen
            .set_text(self.route.name(), 1, 0)
            .unwrap_or_else(|e| {
                warn!("Controller Screen Error: {}", e);
            });
    }
}

impl Compete for Robot {
    async fn connected(&mut self) {
        info!("Field control connected");
        self.show_route();
    }

    async fn autonomous(&mut self) {
        auton::run(self.route, self).await;
    }

    async fn driver(&mut self) {
        opcontrol::drive(self).await;
    }

    /// Route selection: the controller arrows cycle the pick while the
    /// robot sits disabled on the field.
    async fn disabled(&mut self) {
        loop {
            let state = self.controller.state().unwrap_or_else(|e| {
                warn!("Controller State Error: {}", e);
                ControllerState::default()
            });

            if state.button_right.is_now_pressed() {
                self.route = self.route.next();
                self.show_route();
            } else if state.button_left.is_now_pressed() {
                self.route = self.route.prev();
                self.show_route();
            }

            sleep(Controller::UPDATE_INTERVAL).await;
        }
    }
}
