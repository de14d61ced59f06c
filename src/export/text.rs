use std::fmt::Write as _;

use crate::{
    animation::keyframe::Keyframe, foundation::error::KeylineResult, scene::model::AnimationModel,
};

/// Render `model` in the line format accepted by [`crate::read_animation`].
///
/// Motion fields are left-justified in columns sized by their digit count, with a wider gap
/// between the start and end halves.
pub fn export_text(model: &AnimationModel) -> KeylineResult<String> {
    let b = model.bounds()?;
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "canvas {} {} {} {}",
        b.left, b.top, b.width, b.height
    );
    for (id, entry) in model.entries() {
        let _ = writeln!(out, "shape {id} {}", entry.shape.kind);
        for cmd in entry.timeline.commands() {
            let _ = write!(out, "motion {id} ");
            push_keyframe(&mut out, &cmd.start);
            out.push(' ');
            push_keyframe(&mut out, &cmd.end);
            out.push('\n');
        }
    }
    Ok(out)
}

fn push_keyframe(out: &mut String, k: &Keyframe) {
    push_field(out, i64::from(k.tick.0));
    for v in k.attrs.to_array() {
        push_field(out, i64::from(v));
    }
}

fn push_field(out: &mut String, v: i64) {
    let s = v.to_string();
    // Short values fill a 4-wide column; longer ones get a single trailing space.
    let width = (s.len() + 1).max(4);
    let _ = write!(out, "{s:<width$}");
}

#[cfg(test)]
#[path = "../../tests/unit/export/text.rs"]
mod tests;
