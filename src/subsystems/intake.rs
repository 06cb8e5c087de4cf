//! Ring intake ("inveyor") control.
//!
//! A single velocity-controlled conveyor motor. Teleop maps it to a
//! forward/reverse button pair; autonomous routines run it open-loop and
//! watch its live velocity to detect jams.

use std::time::Duration;

use log::warn;
use vexide::{
    prelude::{Motor, sleep},
    smart::motor::BrakeMode,
};

/// The intake subsystem.
pub struct Intake {
    motor: Motor,
}

impl Intake {
    /// Teleop speed in rpm.
    pub const TELEOP_RPM: i32 = 600;

    pub const fn new(motor: Motor) -> Self { Self { motor } }

    /// The motor driving the conveyor, for direct button mapping.
    pub fn motor_mut(&mut self) -> &mut Motor { &mut self.motor }

    /// Runs the conveyor forward at full power.
    pub fn run(&mut self) {
        self.motor
            .set_voltage(Motor::MAX_VOLTAGE)
            .unwrap_or_else(|e| {
                warn!("Intake Motor Error: {}", e);
            });
    }

    /// Stops the conveyor.
    pub fn stop(&mut self) {
        let _ = self.motor.brake(BrakeMode::Coast);
    }

    /// Runs forward for `duration`, then stops. Used to meter single rings
    /// through during autonomous.
    pub async fn feed(&mut self, duration: Duration) {
        self.run();
        sleep(duration).await;
        self.stop();
    }

    /// Live conveyor velocity in rpm; reads zero on a port error so jam
    /// waits terminate.
    pub fn velocity(&self) -> f64 {
        self.motor.velocity().unwrap_or_else(|e| {
            warn!("Intake Motor Error: {}", e);
            0.0
        })
    }
}
