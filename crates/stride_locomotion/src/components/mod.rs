//! ECS Components для акторов
//!
//! Организация по доменам:
//! - actor: базовая идентичность актора (Actor, display_name)
//! - player: player control marker (Player)
//!
//! Сам locomotion state живёт в `crate::locomotion` рядом со своим tick'ом.

pub mod actor;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use player::*;
