//! Tone/speed tuner graph: a draggable point maps to tone (x) and rate (y).

use serde::Serialize;

pub const TUNER_MIN: f32 = 0.8;
pub const TUNER_MAX: f32 = 1.3;

/// Tone and rate selected on the tuner graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TunerPoint {
    pub tone: f32,
    pub rate: f32,
}

/// Map a pointer position inside a `width` x `height` graph to tone and rate.
///
/// The position is clamped into the graph. Tone grows left to right, rate
/// grows bottom to top. A degenerate graph yields the midpoint.
pub fn tune(x: f32, y: f32, width: f32, height: f32) -> TunerPoint {
    TunerPoint {
        tone: axis(x, width),
        rate: axis(height - y.clamp(0.0, height.max(0.0)), height),
    }
}

/// Pointer position for `point`, the inverse of [`tune`].
pub fn position(point: TunerPoint, width: f32, height: f32) -> (f32, f32) {
    let fraction = |v: f32| ((v - TUNER_MIN) / (TUNER_MAX - TUNER_MIN)).clamp(0.0, 1.0);
    (
        fraction(point.tone) * width.max(0.0),
        (1.0 - fraction(point.rate)) * height.max(0.0),
    )
}

fn axis(offset: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 || !offset.is_finite() {
        return (TUNER_MIN + TUNER_MAX) / 2.0;
    }
    let fraction = offset.clamp(0.0, extent) / extent;
    TUNER_MIN + fraction * (TUNER_MAX - TUNER_MIN)
}
