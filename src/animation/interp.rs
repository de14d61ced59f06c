use crate::{
    animation::keyframe::Keyframe,
    foundation::core::{Attrs, Tick},
    foundation::error::{KeylineError, KeylineResult},
};

/// Linearly interpolate every attribute between two keyframes.
///
/// Each attribute is rounded on its own, half-up, in single precision. Both endpoints are
/// returned exactly. A degenerate pair (equal ticks) yields `from`.
pub fn interpolate(tick: Tick, from: &Keyframe, to: &Keyframe) -> KeylineResult<Attrs> {
    if tick < from.tick || tick > to.tick {
        return Err(KeylineError::validation(format!(
            "tick {tick} is outside [{}, {}]",
            from.tick, to.tick
        )));
    }
    if tick == from.tick {
        return Ok(from.attrs);
    }
    if tick == to.tick {
        return Ok(to.attrs);
    }

    let fraction = tick.since(from.tick) as f32 / to.tick.since(from.tick) as f32;
    let a = from.attrs.to_array();
    let b = to.attrs.to_array();
    let mut out = [0i32; 7];
    for (i, v) in out.iter_mut().enumerate() {
        *v = lerp_channel(fraction, a[i], b[i]);
    }
    Ok(Attrs::from_array(out))
}

fn lerp_channel(fraction: f32, from: i32, to: i32) -> i32 {
    let change = (i64::from(to) - i64::from(from)) as f32;
    (i64::from(from) + round_half_up(fraction * change)) as i32
}

fn round_half_up(v: f32) -> i64 {
    let floor = v.floor();
    if v - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
