//! HeadOrientationSink — pitch наружу для head/camera rig
//!
//! Ядро знает только угол; куда он уходит (head node, camera boom,
//! network replication) решает host. Отсутствующий sink = silent no-op.

/// Приёмник pitch-угла взгляда
///
/// Вызывается при каждом изменении look angle (look_up / set_look_angle /
/// re-clamp после смены max_look_angle). Значение уже clamped.
pub trait HeadOrientationSink {
    fn set_pitch(&mut self, pitch: f32);
}
