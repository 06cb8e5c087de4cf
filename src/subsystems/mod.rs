//! Mechanism controllers.
//!
//! Each subsystem owns its devices and a single piece of named state, and
//! exposes two kinds of operation:
//!
//! - **Edge-triggered commands** (`toggle`, `advance`) called once per
//!   debounced button press.
//! - **Per-tick evaluation** (`update`) called every loop iteration, which
//!   re-derives the actuator command from current truth. A bad tick needs
//!   no recovery path; the next tick overwrites it.
//!
//! The decision logic is kept in pure functions and enum methods so the
//! transition tables can be unit tested without a V5 Brain.

/// Mobile-goal clamp state machine.
pub mod clamp;

/// Ring intake control.
pub mod intake;

/// Wall-stake scoring arm state machine.
pub mod ladybrown;
