//! Easing curves.

use overwatch_core::enums::Easing;

/// Map the fraction of elapsed time `t` (clamped to [0, 1]) through `easing`.
///
/// Every curve maps 0 to 0 and 1 to 1 exactly.
pub fn apply(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}
