//! Autonomous routines and route selection.
//!
//! A [`Route`] names one scripted autonomous. The driver cycles through
//! routes with the controller arrows while the robot sits disabled; the
//! current pick is shown on the controller screen and logged. When the
//! field switches to autonomous, [`run`] dispatches the selected script.
//!
//! The scripts themselves live in [`routes`] and are calibration data:
//! sequential evian motions with mechanism actions and fixed delays in
//! between.

pub mod routes;

use log::info;

use crate::hardware::Robot;

/// A selectable autonomous routine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    /// Red alliance, left side: goal rush, then ring cycle.
    #[default]
    RedLeft,
    /// Blue alliance, right side mirror of [`Route::RedLeft`].
    BlueRight,
    /// Conservative single-goal route that works from either left tile.
    SoloAwp,
    /// 60-second programming skills run.
    Skills,
    /// Clears the line and stops; safety pick when untested.
    Nothing,
}

impl Route {
    /// Display name for the controller screen.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RedLeft => "Red Left ",
            Self::BlueRight => "Blue Right",
            Self::SoloAwp => "Solo AWP ",
            Self::Skills => "Skills   ",
            Self::Nothing => "Nothing  ",
        }
    }

    /// The next route in the selection cycle, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::RedLeft => Self::BlueRight,
            Self::BlueRight => Self::SoloAwp,
            Self::SoloAwp => Self::Skills,
            Self::Skills => Self::Nothing,
            Self::Nothing => Self::RedLeft,
        }
    }

    /// The previous route in the selection cycle.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::RedLeft => Self::Nothing,
            Self::BlueRight => Self::RedLeft,
            Self::SoloAwp => Self::BlueRight,
            Self::Skills => Self::SoloAwp,
            Self::Nothing => Self::Skills,
        }
    }
}

/// Runs the selected routine to completion.
pub async fn run(route: Route, robot: &mut Robot) {
    info!("Autonomous: {}", route.name().trim_end());
    match route {
        Route::RedLeft => routes::red_left(robot).await,
        Route::BlueRight => routes::blue_right(robot).await,
        Route::SoloAwp => routes::solo_awp(robot).await,
        Route::Skills => routes::skills(robot).await,
        Route::Nothing => routes::nothing(robot).await,
    }
    info!("Autonomous finished: {}", route.name().trim_end());
}

#[cfg(test)]
mod tests {
    use super::Route;

    const ALL: [Route; 5] = [
        Route::RedLeft,
        Route::BlueRight,
        Route::SoloAwp,
        Route::Skills,
        Route::Nothing,
    ];

    #[test]
    fn next_visits_every_route_and_wraps() {
        let mut seen = Vec::new();
        let mut route = Route::default();
        for _ in 0..ALL.len() {
            seen.push(route);
            route = route.next();
        }
        assert_eq!(route, Route::default());
        for expected in ALL {
            assert!(seen.contains(&expected), "{expected:?} unreachable");
        }
    }

    #[test]
    fn prev_inverts_next() {
        for route in ALL {
            assert_eq!(route.next().prev(), route);
            assert_eq!(route.prev().next(), route);
        }
    }

    #[test]
    fn names_fit_the_controller_screen() {
        for route in ALL {
            assert!(route.name().len() <= 19);
        }
    }
}
