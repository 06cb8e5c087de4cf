//! Mobile-goal clamp control.
//!
//! The clamp is a single pneumatic piston with three named states. The
//! driver toggles it between [`Open`](ClampState::Open) and
//! [`Clamped`](ClampState::Clamped); every state change extends or retracts
//! the piston and reports the new state on the controller screen, with a
//! distinct rumble pattern for the engaged states.
//!
//! [`Armed`](ClampState::Armed) is a valid state with its own entry effects,
//! but nothing in the default control scheme enters it: it belongs to a
//! retired auto-close flow where the goal bumper closed the clamp on
//! contact. The [`arm`](Clamp::arm) operation is kept so that flow can be
//! rebound without touching this module.

use std::time::Duration;

use log::{debug, warn};
use vexide::prelude::{AdiDigitalIn, AdiDigitalOut, Controller, sleep};

/// The clamp's discrete state.
///
/// Exactly one value holds at any time. The state only changes through an
/// explicit command ([`Clamp::toggle`], [`Clamp::arm`], [`Clamp::open`],
/// [`Clamp::close`]), never on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClampState {
    /// Piston retracted, nothing held.
    #[default]
    Open,
    /// Waiting to close on goal contact. Unused by the default bindings.
    Armed,
    /// Piston extended, goal held.
    Clamped,
}

impl ClampState {
    /// The state reached by the driver's toggle: `Open` closes the clamp,
    /// anything else releases it.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Clamped,
            Self::Armed | Self::Clamped => Self::Open,
        }
    }

    /// Whether the piston is extended in this state.
    #[must_use]
    pub const fn engaged(self) -> bool { matches!(self, Self::Clamped) }

    /// Status text shown on the controller screen on entry.
    ///
    /// Labels are padded to a common width so a shorter label fully
    /// overwrites a longer one.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open   ",
            Self::Armed => "Armed  ",
            Self::Clamped => "Clamped",
        }
    }

    /// Rumble pattern played on entry, if any.
    #[must_use]
    pub const fn haptic(self) -> Option<&'static str> {
        match self {
            Self::Open => None,
            Self::Armed => Some("-"),
            Self::Clamped => Some("."),
        }
    }
}

/// The clamp subsystem.
///
/// Owns the piston, the goal-detect bumper, and the current
/// [`ClampState`]. Entry effects (piston, screen text, rumble) run once per
/// state change; callers must gate [`toggle`](Clamp::toggle) on a button
/// edge, not on level.
pub struct Clamp {
    piston: AdiDigitalOut,
    bumper: AdiDigitalIn,
    state:  ClampState,
    settle: Duration,
}

impl Clamp {
    /// Pause between the piston command and each feedback write, so the
    /// actuator command and the screen/rumble messages never land in the
    /// same controller transaction.
    pub const SETTLE: Duration = Duration::from_millis(50);

    /// Creates the clamp in the [`Open`](ClampState::Open) state.
    pub const fn new(piston: AdiDigitalOut, bumper: AdiDigitalIn) -> Self {
        Self {
            piston,
            bumper,
            state: ClampState::Open,
            settle: Self::SETTLE,
        }
    }

    /// Overrides the feedback settle delay. Tests and bench setups can pass
    /// [`Duration::ZERO`] to run the entry effects back to back.
    #[must_use]
    pub const fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> ClampState { self.state }

    /// Whether the goal bumper is pressed.
    ///
    /// Reads false on a port error, which only ever delays an auto-close.
    pub fn goal_present(&self) -> bool {
        self.bumper.is_high().unwrap_or_else(|e| {
            warn!("Clamp Bumper Error: {}", e);
            false
        })
    }

    /// Driver toggle: `Open` becomes `Clamped`, anything else becomes
    /// `Open`. Call on a button edge only.
    pub async fn toggle(&mut self, controller: &mut Controller) {
        self.enter(self.state.toggled(), controller).await;
    }

    /// Closes the clamp regardless of the current state.
    pub async fn close(&mut self, controller: &mut Controller) {
        self.enter(ClampState::Clamped, controller).await;
    }

    /// Opens the clamp regardless of the current state.
    pub async fn open(&mut self, controller: &mut Controller) {
        self.enter(ClampState::Open, controller).await;
    }

    /// Arms the clamp for the goal-contact auto-close flow.
    ///
    /// Not bound to any button in the default scheme; see the module docs.
    pub async fn arm(&mut self, controller: &mut Controller) {
        self.enter(ClampState::Armed, controller).await;
    }

    async fn enter(&mut self, state: ClampState, controller: &mut Controller) {
        debug!("Clamp {:?} -> {:?}", self.state, state);
        self.state = state;

        let piston = if state.engaged() {
            self.piston.set_high()
        } else {
            self.piston.set_low()
        };
        piston.unwrap_or_else(|e| {
            warn!("Clamp Piston Error: {}", e);
        });

        sleep(self.settle).await;
        controller
            .screen
            .set_text(state.label(), 0, 0)
            .unwrap_or_else(|e| {
                warn!("Controller Screen Error: {}", e);
            });

        if let Some(pattern) = state.haptic() {
            sleep(self.settle).await;
            controller.rumble(pattern).unwrap_or_else(|e| {
                warn!("Controller Rumble Error: {}", e);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClampState;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(ClampState::Open.toggled(), ClampState::Clamped);
        assert_eq!(ClampState::Clamped.toggled(), ClampState::Open);
        // Two edge-gated toggles always return to the starting state.
        assert_eq!(ClampState::Open.toggled().toggled(), ClampState::Open);
        assert_eq!(ClampState::Clamped.toggled().toggled(), ClampState::Clamped);
    }

    #[test]
    fn armed_releases_on_toggle() {
        assert_eq!(ClampState::Armed.toggled(), ClampState::Open);
    }

    #[test]
    fn piston_extends_only_when_clamped() {
        assert!(!ClampState::Open.engaged());
        assert!(!ClampState::Armed.engaged());
        assert!(ClampState::Clamped.engaged());
    }

    #[test]
    fn labels_share_a_width() {
        let width = ClampState::Clamped.label().len();
        for state in [ClampState::Open, ClampState::Armed, ClampState::Clamped] {
            assert_eq!(state.label().len(), width);
        }
    }

    #[test]
    fn haptics_fire_for_engaged_states_only() {
        assert_eq!(ClampState::Open.haptic(), None);
        assert_eq!(ClampState::Armed.haptic(), Some("-"));
        assert_eq!(ClampState::Clamped.haptic(), Some("."));
    }
}
