use log::LevelFilter;
use talos::{fs::logger, hardware::Robot};
use vexide::prelude::*;

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Debug).expect("failed to initialize logger");

    let robot = Robot::new(peripherals).await;

    robot.compete().await;
}
