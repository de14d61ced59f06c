use std::fmt::Write as _;

use crate::{
    animation::command::MotionCommand,
    foundation::core::{Attrs, Bounds},
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::ShapeKind,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `model` as an animated SVG document playing at `speed` ticks per second.
///
/// Coordinates are made canvas-relative. Each motion becomes one `<animate>` per attribute it
/// changes; shapes whose first motion starts after tick 1 stay hidden until then.
#[tracing::instrument(skip(model))]
pub fn export_svg(model: &AnimationModel, speed: u32) -> KeylineResult<String> {
    if speed < 1 {
        return Err(KeylineError::validation("speed must be >= 1"));
    }
    let bounds = model.bounds()?;
    let ms_per_tick = u64::from(1000 / speed);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg width=\"{}\" height=\"{}\" version=\"1.1\"\n    xmlns=\"{SVG_NS}\">",
        bounds.width, bounds.height
    );
    for (id, entry) in model.entries() {
        let kind = entry.shape.kind;
        let tag = element_name(kind);
        let commands = entry.timeline.commands();
        match commands.first() {
            None => {
                let empty = geometry(kind, &bounds, &Attrs::default());
                let _ = writeln!(
                    out,
                    "<{tag} id=\"{id}\" {} fill=\"rgb(0,0,0)\" visibility=\"hidden\" >",
                    attr_list(&empty)
                );
            }
            Some(first) => {
                let start = &first.start;
                let initial = geometry(kind, &bounds, &start.attrs);
                let hidden = start.tick.0 > 1;
                let _ = writeln!(
                    out,
                    "<{tag} id=\"{id}\" {} fill=\"{}\" visibility=\"{}\" >",
                    attr_list(&initial),
                    rgb(&start.attrs),
                    if hidden { "hidden" } else { "visible" }
                );
                if hidden {
                    let begin = u64::from(start.tick.0) * ms_per_tick;
                    let _ = writeln!(
                        out,
                        "    <animate attributeType=\"xml\" begin=\"{begin}ms\" dur=\"1ms\" \
                         attributeName=\"visibility\" from=\"hidden\" to=\"visible\" \
                         fill=\"freeze\" />"
                    );
                }
            }
        }
        for cmd in commands {
            push_animations(&mut out, kind, &bounds, cmd, ms_per_tick);
        }
        let _ = writeln!(out, "</{tag}>\n");
    }
    out.push_str("</svg>\n");
    Ok(out)
}

fn element_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "rect",
        ShapeKind::Ellipse => "ellipse",
    }
}

/// SVG geometry attributes in animation order: position, height, width.
fn geometry(kind: ShapeKind, bounds: &Bounds, a: &Attrs) -> [(&'static str, i64); 4] {
    let x = i64::from(a.x) - i64::from(bounds.left);
    let y = i64::from(a.y) - i64::from(bounds.top);
    let (w, h) = (i64::from(a.w), i64::from(a.h));
    match kind {
        ShapeKind::Rectangle => [("x", x), ("y", y), ("height", h), ("width", w)],
        ShapeKind::Ellipse => [
            ("cx", x + w / 2),
            ("cy", y + h / 2),
            ("ry", h / 2),
            ("rx", w / 2),
        ],
    }
}

fn attr_list(geometry: &[(&'static str, i64); 4]) -> String {
    // Declaration order differs from animation order: position first, then width before height.
    let [pos_x, pos_y, height, width] = geometry;
    [pos_x, pos_y, width, height]
        .iter()
        .map(|(name, v)| format!("{name}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rgb(a: &Attrs) -> String {
    format!("rgb({},{},{})", a.r, a.g, a.b)
}

fn push_animations(
    out: &mut String,
    kind: ShapeKind,
    bounds: &Bounds,
    cmd: &MotionCommand,
    ms_per_tick: u64,
) {
    let begin = u64::from(cmd.start.tick.0) * ms_per_tick;
    let dur = u64::from(cmd.duration()) * ms_per_tick;
    let from = geometry(kind, bounds, &cmd.start.attrs);
    let to = geometry(kind, bounds, &cmd.end.attrs);

    let mut animate = |name: &str, from: &str, to: &str| {
        let _ = writeln!(
            out,
            "    <animate attributeType=\"xml\" begin=\"{begin}ms\" dur=\"{dur}ms\" \
             attributeName=\"{name}\" from=\"{from}\" to=\"{to}\" fill=\"freeze\" />"
        );
    };
    for ((name, a), (_, b)) in from.iter().zip(to.iter()) {
        if a != b {
            animate(name, &a.to_string(), &b.to_string());
        }
    }
    let (c0, c1) = (&cmd.start.attrs, &cmd.end.attrs);
    if (c0.r, c0.g, c0.b) != (c1.r, c1.g, c1.b) {
        animate("fill", &rgb(c0), &rgb(c1));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
