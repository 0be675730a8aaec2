//! Input boundary — сырой ввод превращается в TickInput events
//!
//! Ядро девайсы не опрашивает: host engine (или AI) реализует
//! [`InputAdapter`] и отдаёт по одному sample'у на fixed tick.

use bevy::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::components::Player;

/// Input-намерение одного актора на один tick
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub entity: Entity,
    /// Планарное направление (нормализуется controller'ом; ноль = стоим)
    pub motion: Vec2,
    /// Запрос прыжка (в воздухе молча отбрасывается)
    pub jump_requested: bool,
    /// Сдвиг pitch'а взгляда за tick, радианы
    pub look_delta: f32,
}

/// Один sample адаптера (без Entity — адаптер не знает про ECS)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdapterSample {
    pub motion: Vec2,
    pub jump_requested: bool,
    pub look_delta: f32,
}

/// Адаптер сырого ввода (клавиатура/геймпад/AI/скрипт)
///
/// Вызывается ровно один раз на fixed tick.
pub trait InputAdapter {
    fn sample(&mut self) -> AdapterSample;
}

/// Resource с активным адаптером для player-controlled акторов
#[derive(Resource)]
pub struct InputSource {
    pub adapter: Box<dyn InputAdapter + Send + Sync>,
}

impl InputSource {
    pub fn new(adapter: Box<dyn InputAdapter + Send + Sync>) -> Self {
        Self { adapter }
    }
}

/// Система: опрашивает адаптер и публикует TickInput для player-акторов
///
/// Работает только если host вставил [`InputSource`]
/// (см. `LocomotionPlugin`, run_if).
pub fn pump_input(
    mut source: ResMut<InputSource>,
    players: Query<Entity, With<Player>>,
    mut writer: EventWriter<TickInput>,
) {
    let sample = source.adapter.sample();
    for entity in players.iter() {
        writer.write(TickInput {
            entity,
            motion: sample.motion,
            jump_requested: sample.jump_requested,
            look_delta: sample.look_delta,
        });
    }
}

/// Детерминированный wander-ввод для headless demo
///
/// Seeded ChaCha8 (как `DeterministicRng`): одинаковый seed — одинаковая
/// прогулка. Периодически меняет направление и изредка прыгает.
pub struct WanderInput {
    rng: ChaCha8Rng,
    direction: Vec2,
    ticks_until_turn: u32,
    tick: u64,
}

impl WanderInput {
    /// Каждые 2 секунды (120 tick'ов на 60Hz) — новое направление
    const TURN_INTERVAL: u32 = 120;
    /// Примерно раз в 4 секунды — прыжок
    const JUMP_PERIOD: u64 = 240;

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            direction: Vec2::ZERO,
            ticks_until_turn: 0,
            tick: 0,
        }
    }
}

impl InputAdapter for WanderInput {
    fn sample(&mut self) -> AdapterSample {
        if self.ticks_until_turn == 0 {
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            self.direction = Vec2::new(angle.cos(), angle.sin());
            self.ticks_until_turn = Self::TURN_INTERVAL;
        }
        self.ticks_until_turn -= 1;
        self.tick += 1;

        AdapterSample {
            motion: self.direction,
            jump_requested: self.tick % Self::JUMP_PERIOD == 0,
            look_delta: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wander_is_deterministic() {
        let mut a = WanderInput::seeded(7);
        let mut b = WanderInput::seeded(7);

        for _ in 0..300 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn test_wander_motion_is_unit_length() {
        let mut input = WanderInput::seeded(1);

        for _ in 0..300 {
            let sample = input.sample();
            assert!((sample.motion.length() - 1.0).abs() < 1e-5);
        }
    }
}
