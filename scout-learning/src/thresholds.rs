//! Bang-bang threshold adjustment from feedback.

use scout_core::config::LearningConfig;

/// Move a threshold one step toward agreeing with an observation.
///
/// A correct verification below the threshold means the bar was too high;
/// an incorrect one at or above it means the bar was too low. Returns the
/// new value only when the threshold actually moves, clamped to the
/// configured floor and ceiling.
pub(crate) fn adjust(
    current: f64,
    confidence: f64,
    is_correct: bool,
    config: &LearningConfig,
) -> Option<f64> {
    let proposed = if is_correct && confidence < current {
        current - config.threshold_step
    } else if !is_correct && confidence >= current {
        current + config.threshold_step
    } else {
        return None;
    };
    let clamped = proposed.clamp(config.threshold_floor, config.threshold_ceiling);
    (clamped != current).then_some(clamped)
}
