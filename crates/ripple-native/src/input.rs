use ripple_core::{RESOLUTION_MAX, RESOLUTION_MIN, RESOLUTION_STEP};

/// Resolution change requested by a key, if any.
#[inline]
pub fn resolution_delta_for_key(key: &str) -> Option<i32> {
    match key {
        "ArrowUp" => Some(RESOLUTION_STEP as i32),
        "ArrowDown" => Some(-(RESOLUTION_STEP as i32)),
        "+" | "=" => Some(1),
        "-" | "_" => Some(-1),
        _ => None,
    }
}

/// Apply `delta` to `current`, clamped to the configurable range.
#[inline]
pub fn stepped_resolution(current: u32, delta: i32) -> u32 {
    let next = current as i64 + delta as i64;
    next.clamp(RESOLUTION_MIN as i64, RESOLUTION_MAX as i64) as u32
}
