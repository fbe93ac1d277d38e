/// Easing helpers.

/// `1 - (1 - t)^3`, with `t` clamped to [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear interpolation, exact at both ends.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from * (1.0 - t) + to * t
}
