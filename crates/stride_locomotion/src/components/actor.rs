//! Базовый компонент актора: идентичность + автоматический locomotion state

use bevy::prelude::*;

use crate::locomotion::LocomotionController;

/// Актор (NPC, игрок) — базовый компонент для существ с локомоцией
///
/// Автоматически добавляет LocomotionController через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(LocomotionController)]
pub struct Actor {
    /// Имя для логов/UI (не участвует в симуляции)
    pub display_name: String,
}

impl Actor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            display_name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_is_reflectable() {
        fn assert_reflect<T: Reflect>() {}
        assert_reflect::<Actor>();

        let actor = Actor::named("scout");
        assert_eq!(actor.display_name, "scout");
    }
}
