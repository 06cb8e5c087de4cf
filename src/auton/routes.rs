//! The autonomous routine scripts.
//!
//! Every routine is a straight line of blocking chassis motions with
//! mechanism actions and fixed settle delays between them. Distances are
//! in inches, headings in degrees counterclockwise with the robot starting
//! at 90. Speed caps come from [`crate::hardware::volts`].
//!
//! These numbers are field calibration, not logic; retune them on the
//! practice field, not in review.

use std::time::Duration;

use evian::prelude::*;
use vexide::prelude::sleep;

use crate::hardware::{Robot, motion, volts};

/// Poll period for the intake jam wait in [`solo_awp`].
const JAM_POLL: Duration = Duration::from_millis(20);

/// Red alliance, left side: score the preload on the alliance stake, rush
/// the goal, then cycle rings onto it.
pub async fn red_left(robot: &mut Robot) {
    let dt = &mut robot.drivetrain;
    let mut basic = motion();

    basic
        .drive_distance(dt, -19.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    let mut heading = 135.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    // Alliance stake: flick the preload off the arm.
    robot.ladybrown.flick(Duration::from_millis(250)).await;
    sleep(Duration::from_millis(1000)).await;

    basic
        .drive_distance(dt, -7.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading = 222.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    // Back into the goal and grab it.
    basic
        .drive_distance(dt, -41.0)
        .with_linear_output_limit(volts(70.0))
        .await;
    robot.clamp.close(&mut robot.controller).await;

    heading = 85.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    robot.intake.run();

    // First ring.
    basic
        .drive_distance(dt, 20.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    basic
        .drive_distance(dt, 4.3)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading -= 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    // Second ring, then back out.
    basic
        .drive_distance(dt, 10.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    basic
        .drive_distance(dt, -20.0)
        .with_linear_output_limit(volts(70.0))
        .await;
    basic.turn_to_heading(dt, heading.deg()).await;

    // Touch the ladder for the AWP.
    basic
        .drive_distance(dt, 32.0)
        .with_linear_output_limit(volts(110.0))
        .await;

    // Hold everything until the period ends.
    sleep(Duration::from_secs(60)).await;
}

/// Blue alliance, right side mirror of [`red_left`].
pub async fn blue_right(robot: &mut Robot) {
    let dt = &mut robot.drivetrain;
    let mut basic = motion();

    basic
        .drive_distance(dt, -19.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    let mut heading = 45.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    robot.ladybrown.flick(Duration::from_millis(250)).await;
    sleep(Duration::from_millis(1000)).await;

    basic
        .drive_distance(dt, -5.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    basic
        .drive_distance(dt, 2.0)
        .with_linear_output_limit(volts(70.0))
        .await;
    heading = -42.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    basic
        .drive_distance(dt, -41.0)
        .with_linear_output_limit(volts(70.0))
        .await;
    robot.clamp.close(&mut robot.controller).await;

    heading = 95.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    robot.intake.run();

    basic
        .drive_distance(dt, 20.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    basic
        .drive_distance(dt, 4.3)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading += 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    basic
        .drive_distance(dt, 10.0)
        .with_linear_output_limit(volts(90.0))
        .await;
    basic
        .drive_distance(dt, -20.0)
        .with_linear_output_limit(volts(70.0))
        .await;
    heading += 70.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    basic
        .drive_distance(dt, 32.0)
        .with_linear_output_limit(volts(110.0))
        .await;

    sleep(Duration::from_secs(60)).await;
}

/// Conservative single-goal route: grab the near goal, score the preload
/// ring onto it, and park against the ladder.
///
/// Uses the clamp's goal bumper to nudge forward if the goal was not
/// reached on the first approach.
pub async fn solo_awp(robot: &mut Robot) {
    let dt = &mut robot.drivetrain;
    let mut basic = motion();

    basic
        .drive_distance(dt, -24.0)
        .with_linear_output_limit(volts(50.0))
        .await;
    if !robot.clamp.goal_present() {
        basic
            .drive_distance(dt, 1.0)
            .with_linear_output_limit(volts(110.0))
            .await;
    }
    robot.clamp.close(&mut robot.controller).await;
    sleep(Duration::from_millis(500)).await;

    robot.intake.feed(Duration::from_millis(500)).await;
    sleep(Duration::from_millis(1000)).await;

    let mut heading = 15.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    // Let the conveyor spin down before metering the next ring through.
    while robot.intake.velocity() > 10.0 {
        sleep(JAM_POLL).await;
    }
    robot.intake.feed(Duration::from_millis(1000)).await;

    basic
        .drive_distance(dt, 19.0)
        .with_linear_output_limit(volts(55.0))
        .await;
    robot.intake.feed(Duration::from_millis(1000)).await;
    sleep(Duration::from_millis(3000)).await;

    // Ladder touch.
    heading -= 160.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 33.0)
        .with_linear_output_limit(volts(90.0))
        .await;
}

/// 60-second programming skills run: alliance stake, then two mirrored
/// goal cycles ending with each goal in a corner.
pub async fn skills(robot: &mut Robot) {
    let dt = &mut robot.drivetrain;
    let mut basic = motion();
    let mut heading = 90.0;

    // Alliance stake preload.
    robot.ladybrown.flick(Duration::from_millis(250)).await;
    sleep(Duration::from_millis(1000)).await;

    // Shake the arm clear of the stake.
    heading -= 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    heading += 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;

    // First goal.
    basic
        .drive_distance(dt, -10.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading = 0.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, -25.5)
        .with_linear_output_limit(volts(50.0))
        .await;
    robot.intake.run();
    robot.clamp.close(&mut robot.controller).await;

    // First ring.
    basic
        .drive_distance(dt, -3.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading -= 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 24.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    sleep(Duration::from_millis(1000)).await;

    // Second ring.
    heading -= 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 21.25)
        .with_linear_output_limit(volts(40.0))
        .await;
    sleep(Duration::from_millis(1000)).await;

    // Third and fourth rings along the wall.
    heading -= 88.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 20.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    sleep(Duration::from_millis(875)).await;
    basic
        .drive_distance(dt, 16.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    sleep(Duration::from_millis(1000)).await;

    // Drop the full goal in the corner.
    heading -= 122.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    robot.clamp.open(&mut robot.controller).await;
    basic
        .drive_distance(dt, -12.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    basic
        .drive_distance(dt, 24.5)
        .with_linear_output_limit(volts(80.0))
        .await;

    // Second goal.
    heading -= 145.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, -50.5)
        .with_linear_output_limit(volts(75.0))
        .await;
    robot.clamp.close(&mut robot.controller).await;

    // Mirror the ring cycle on the other half of the field.
    basic
        .drive_distance(dt, -3.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    heading += 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 25.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    robot.intake.feed(Duration::from_millis(1000)).await;
    sleep(Duration::from_millis(2000)).await;

    heading += 90.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 21.25)
        .with_linear_output_limit(volts(40.0))
        .await;
    sleep(Duration::from_millis(2000)).await;

    basic
        .drive_distance(dt, 3.5)
        .with_linear_output_limit(volts(40.0))
        .await;
    heading += 88.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    basic
        .drive_distance(dt, 20.0)
        .with_linear_output_limit(volts(60.0))
        .await;
    sleep(Duration::from_millis(875)).await;
    basic
        .drive_distance(dt, 14.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    sleep(Duration::from_millis(2500)).await;

    // Second corner drop.
    heading += 122.0;
    basic.turn_to_heading(dt, heading.deg()).await;
    robot.clamp.open(&mut robot.controller).await;
    basic
        .drive_distance(dt, -12.0)
        .with_linear_output_limit(volts(40.0))
        .await;
    basic
        .drive_distance(dt, 26.0)
        .with_linear_output_limit(volts(80.0))
        .await;
}

/// Crosses the autonomous line and stops.
pub async fn nothing(robot: &mut Robot) {
    let mut basic = motion();
    basic
        .drive_distance(&mut robot.drivetrain, 5.0)
        .with_linear_output_limit(volts(60.0))
        .await;
}
