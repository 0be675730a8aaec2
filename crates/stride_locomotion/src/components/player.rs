//! Player control marker component
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// Акторы С этим компонентом получают [`crate::TickInput`] от player
/// input adapter'а; акторы БЕЗ него — от AI (в single-player обычно
/// ровно один entity несёт этот marker).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
