//! Headless locomotion demo
//!
//! Запускает Bevy App без рендера: один актор-wanderer на плоском полу,
//! детерминированный seeded ввод, периодический статус в stdout.

use bevy::prelude::*;
use stride_locomotion::{
    create_headless_app, Actor, DeterministicRng, FlatGroundSolver, InputSource,
    LocomotionController, Player, SolverHandle, WanderInput,
};

fn main() {
    let seed = 42;
    println!("Starting STRIDE headless locomotion demo (seed: {})", seed);

    let mut app = create_headless_app(seed);

    // Плоский пол вместо engine sweep'а
    app.insert_resource(SolverHandle(Box::new(FlatGroundSolver::new(0.0))));

    // Wander-ввод сидируется тем же seed'ом что и симуляция
    let wander_seed = app.world().resource::<DeterministicRng>().seed;
    app.insert_resource(InputSource::new(Box::new(WanderInput::seeded(wander_seed))));

    let player = app
        .world_mut()
        .spawn((Actor::named("wanderer"), Player))
        .id();

    // Гоняем 600 tick'ов симуляции
    for tick in 0..600 {
        app.update();

        if tick % 100 == 0 {
            if let Some(controller) = app.world().entity(player).get::<LocomotionController>() {
                println!(
                    "Tick {}: velocity {:?}, grounded: {}, running: {}",
                    tick,
                    controller.velocity(),
                    controller.grounded(),
                    controller.is_running()
                );
            }
        }
    }

    println!("Demo complete!");
}
