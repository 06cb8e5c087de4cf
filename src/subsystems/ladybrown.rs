//! Wall-stake scoring arm ("ladybrown") control.
//!
//! The arm is a velocity-controlled motor pair with a potentiometer on the
//! pivot. Every tick of the driver loop the controller computes a command
//! from the stored [`ArmState`], the live angle, and the held buttons; the
//! stored state and the commanded behavior can deliberately diverge (a
//! manual hold overrides any state without destroying it).
//!
//! The per-tick rule list lives in [`step`], a pure function, so the entire
//! transition table is testable without hardware.

use std::time::Duration;

use log::{debug, warn};
use vexide::{
    prelude::{AdiAnalogIn, Motor, sleep},
    smart::motor::BrakeMode,
};

/// The arm's discrete state.
///
/// The driver cycle walks `Passthrough -> Load -> Score`. `FreeSpin` is
/// only entered by the manual raise/lower holds; `Score` reverts to
/// `Passthrough` on its own once its driving input is released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArmState {
    /// Manual control took over; no automatic motion.
    FreeSpin,
    /// Returning to rest at the bottom of travel.
    #[default]
    Passthrough,
    /// Creeping up to the ring-load angle.
    Load,
    /// Armed to fire: raises while the fire button is held.
    Score,
}

impl ArmState {
    /// The next state in the driver cycle.
    ///
    /// `Score` holds here; it is left through the per-tick reversion in
    /// [`step`], not through the cycle button.
    #[must_use]
    pub const fn advanced(self) -> Self {
        match self {
            Self::FreeSpin => Self::Passthrough,
            Self::Passthrough => Self::Load,
            Self::Load => Self::Score,
            Self::Score => Self::Score,
        }
    }
}

/// Held operator inputs relevant to the arm, sampled once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArmInput {
    /// Manual raise held.
    pub raise: bool,
    /// Manual lower held.
    pub lower: bool,
    /// Fire held; only meaningful in [`ArmState::Score`].
    pub fire:  bool,
}

/// One tick's motor command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmCommand {
    /// Spin at the given velocity in rpm; negative lowers the arm.
    Spin(i32),
    /// Brake and hold the current position.
    Hold,
}

/// Arm calibration.
///
/// Angles are percent of potentiometer travel and must satisfy
/// `min_angle < load_angle < max_angle`. Travel outside the band is never
/// commanded: at an endpoint the matching direction is substituted with
/// [`ArmCommand::Hold`].
#[derive(Clone, Copy, Debug)]
pub struct ArmSettings {
    /// Lower travel limit.
    pub min_angle:  f64,
    /// Ring-load target, approached at creep speed.
    pub load_angle: f64,
    /// Upper travel limit.
    pub max_angle:  f64,
    /// Full travel speed in rpm.
    pub travel_rpm: i32,
    /// Fine-positioning speed in rpm, used to approach the load angle.
    pub creep_rpm:  i32,
}

impl Default for ArmSettings {
    fn default() -> Self {
        Self {
            min_angle:  7.0,
            load_angle: 16.0,
            max_angle:  100.0,
            travel_rpm: 200,
            creep_rpm:  50,
        }
    }
}

/// Computes one tick of arm behavior.
///
/// Rules are evaluated in strict priority order and the first match wins:
///
/// 1. Manual raise: spin up below `max_angle`, otherwise hold. Moving this
///    way hands the state to [`ArmState::FreeSpin`].
/// 2. Manual lower: mirrored against `min_angle`.
/// 3. Otherwise the stored state decides, as documented on [`ArmState`].
///
/// `Score` with fire released reverts to `Passthrough` and re-evaluates the
/// same tick, so the caller always gets a real command out of this function.
#[must_use]
pub fn step(
    state: ArmState,
    angle: f64,
    input: ArmInput,
    settings: &ArmSettings,
) -> (ArmCommand, ArmState) {
    if input.raise {
        if angle < settings.max_angle {
            (ArmCommand::Spin(settings.travel_rpm), ArmState::FreeSpin)
        } else {
            (ArmCommand::Hold, state)
        }
    } else if input.lower {
        if angle > settings.min_angle {
            (ArmCommand::Spin(-settings.travel_rpm), ArmState::FreeSpin)
        } else {
            (ArmCommand::Hold, state)
        }
    } else {
        match state {
            ArmState::FreeSpin => (ArmCommand::Hold, ArmState::FreeSpin),
            ArmState::Passthrough => {
                if angle > settings.min_angle {
                    (ArmCommand::Spin(-settings.travel_rpm), ArmState::Passthrough)
                } else {
                    (ArmCommand::Hold, ArmState::Passthrough)
                }
            }
            ArmState::Load => {
                // No auto-advance at the target; the driver cycles onward.
                if angle < settings.load_angle {
                    (ArmCommand::Spin(settings.creep_rpm), ArmState::Load)
                } else {
                    (ArmCommand::Hold, ArmState::Load)
                }
            }
            ArmState::Score => {
                if input.fire {
                    if angle < settings.max_angle {
                        (ArmCommand::Spin(settings.travel_rpm), ArmState::Score)
                    } else {
                        (ArmCommand::Hold, ArmState::Score)
                    }
                } else {
                    step(ArmState::Passthrough, angle, input, settings)
                }
            }
        }
    }
}

/// Raw potentiometer counts per percent of travel (12-bit over 0..100).
const COUNTS_PER_PERCENT: f64 = 40.96;

/// The ladybrown subsystem: the motor pair, the pivot potentiometer, and
/// the stored [`ArmState`].
pub struct Ladybrown {
    motors:   [Motor; 2],
    pot:      AdiAnalogIn,
    state:    ArmState,
    settings: ArmSettings,
}

impl Ladybrown {
    /// Creates the arm in [`ArmState::Passthrough`] with default
    /// calibration.
    pub fn new(motors: [Motor; 2], pot: AdiAnalogIn) -> Self {
        Self {
            motors,
            pot,
            state: ArmState::default(),
            settings: ArmSettings::default(),
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ArmState { self.state }

    /// The pivot angle as percent of travel.
    ///
    /// A port error reads as the bottom of travel, which the rule list
    /// answers with hold or creep, never full-speed motion toward a limit.
    pub fn angle(&self) -> f64 {
        match self.pot.value() {
            Ok(raw) => f64::from(raw) / COUNTS_PER_PERCENT,
            Err(e) => {
                warn!("Arm Potentiometer Error: {}", e);
                0.0
            }
        }
    }

    /// Runs one tick: evaluates [`step`] against the live angle and applies
    /// the resulting command to the motors.
    pub fn update(&mut self, input: ArmInput) {
        let (command, next) = step(self.state, self.angle(), input, &self.settings);
        if next != self.state {
            debug!("Arm {:?} -> {:?}", self.state, next);
            self.state = next;
        }

        match command {
            ArmCommand::Spin(rpm) => {
                for motor in &mut self.motors {
                    motor.set_velocity(rpm).unwrap_or_else(|e| {
                        warn!("Arm Motor Error: {}", e);
                    });
                }
            }
            ArmCommand::Hold => {
                for motor in &mut self.motors {
                    let _ = motor.brake(BrakeMode::Hold);
                }
            }
        }
    }

    /// Advances the driver cycle. Call on a button edge only.
    pub fn advance(&mut self) {
        let next = self.state.advanced();
        debug!("Arm cycle {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Flicks the arm backwards at full speed for `duration`, then holds.
    ///
    /// Used by autonomous routines to score the preload off the arm before
    /// the first drive.
    pub async fn flick(&mut self, duration: Duration) {
        for motor in &mut self.motors {
            motor
                .set_velocity(-self.settings.travel_rpm)
                .unwrap_or_else(|e| {
                    warn!("Arm Motor Error: {}", e);
                });
        }
        sleep(duration).await;
        for motor in &mut self.motors {
            let _ = motor.brake(BrakeMode::Hold);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: ArmInput = ArmInput {
        raise: false,
        lower: false,
        fire:  false,
    };
    const RAISE: ArmInput = ArmInput {
        raise: true,
        lower: false,
        fire:  false,
    };
    const LOWER: ArmInput = ArmInput {
        raise: false,
        lower: true,
        fire:  false,
    };
    const FIRE: ArmInput = ArmInput {
        raise: false,
        lower: false,
        fire:  true,
    };

    const ALL_STATES: [ArmState; 4] = [
        ArmState::FreeSpin,
        ArmState::Passthrough,
        ArmState::Load,
        ArmState::Score,
    ];

    fn cal() -> ArmSettings { ArmSettings::default() }

    #[test]
    fn manual_raise_moves_and_frees_the_arm() {
        let (command, next) = step(ArmState::Load, 50.0, RAISE, &cal());
        assert_eq!(command, ArmCommand::Spin(cal().travel_rpm));
        assert_eq!(next, ArmState::FreeSpin);
    }

    #[test]
    fn manual_raise_holds_at_the_top() {
        for state in ALL_STATES {
            let (command, next) = step(state, cal().max_angle, RAISE, &cal());
            assert_eq!(command, ArmCommand::Hold);
            // Braking at the limit does not disturb the stored state.
            assert_eq!(next, state);
        }
    }

    #[test]
    fn manual_lower_holds_at_the_bottom() {
        for state in ALL_STATES {
            let (command, next) = step(state, cal().min_angle, LOWER, &cal());
            assert_eq!(command, ArmCommand::Hold);
            assert_eq!(next, state);
        }
    }

    #[test]
    fn free_spin_is_idle_without_input() {
        let (command, next) = step(ArmState::FreeSpin, 42.0, IDLE, &cal());
        assert_eq!(command, ArmCommand::Hold);
        assert_eq!(next, ArmState::FreeSpin);
    }

    #[test]
    fn passthrough_returns_to_rest() {
        let (command, next) = step(ArmState::Passthrough, 42.0, IDLE, &cal());
        assert_eq!(command, ArmCommand::Spin(-cal().travel_rpm));
        assert_eq!(next, ArmState::Passthrough);
    }

    #[test]
    fn passthrough_below_the_band_holds() {
        // Sensor under the lower limit must brake, never drive lower still.
        let (command, next) = step(ArmState::Passthrough, 5.0, IDLE, &cal());
        assert_eq!(command, ArmCommand::Hold);
        assert_eq!(next, ArmState::Passthrough);
    }

    #[test]
    fn load_creeps_to_the_target() {
        let (command, next) = step(ArmState::Load, 10.0, IDLE, &cal());
        assert_eq!(command, ArmCommand::Spin(cal().creep_rpm));
        assert_eq!(next, ArmState::Load);
    }

    #[test]
    fn load_holds_at_the_target_without_advancing() {
        let (command, next) = step(ArmState::Load, cal().load_angle, IDLE, &cal());
        assert_eq!(command, ArmCommand::Hold);
        assert_eq!(next, ArmState::Load);
    }

    #[test]
    fn score_raises_while_fire_is_held() {
        let (command, next) = step(ArmState::Score, 50.0, FIRE, &cal());
        assert_eq!(command, ArmCommand::Spin(cal().travel_rpm));
        assert_eq!(next, ArmState::Score);

        let (command, next) = step(ArmState::Score, cal().max_angle, FIRE, &cal());
        assert_eq!(command, ArmCommand::Hold);
        assert_eq!(next, ArmState::Score);
    }

    #[test]
    fn score_reverts_once_fire_is_released() {
        // The same tick that reverts also produces the passthrough command.
        let (command, next) = step(ArmState::Score, 50.0, IDLE, &cal());
        assert_eq!(next, ArmState::Passthrough);
        assert_eq!(command, ArmCommand::Spin(-cal().travel_rpm));

        let (command, next) = step(ArmState::Score, 5.0, IDLE, &cal());
        assert_eq!(next, ArmState::Passthrough);
        assert_eq!(command, ArmCommand::Hold);
    }

    #[test]
    fn cycle_walks_passthrough_load_score() {
        assert_eq!(ArmState::Passthrough.advanced(), ArmState::Load);
        assert_eq!(ArmState::Load.advanced(), ArmState::Score);
        assert_eq!(ArmState::Score.advanced(), ArmState::Score);
        assert_eq!(ArmState::FreeSpin.advanced(), ArmState::Passthrough);
    }

    #[test]
    fn no_command_ever_leaves_the_band() {
        let cal = cal();
        let inputs = [IDLE, RAISE, LOWER, FIRE];
        for state in ALL_STATES {
            for input in inputs {
                let (at_top, _) = step(state, cal.max_angle, input, &cal);
                if let ArmCommand::Spin(rpm) = at_top {
                    assert!(rpm < 0, "{state:?}/{input:?} drove past max");
                }
                let (at_bottom, _) = step(state, cal.min_angle, input, &cal);
                if let ArmCommand::Spin(rpm) = at_bottom {
                    assert!(rpm > 0, "{state:?}/{input:?} drove past min");
                }
            }
        }
    }
}
