use std::path::Path;

use anyhow::Context as _;

use crate::{
    composition::builder::{AnimationBuilder, ModelBuilder},
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::ShapeKind,
};

const MOTION_FIELDS: usize = 16;

/// Feed declarative animation text into `builder`, line by line.
///
/// Recognised lines, whitespace separated:
///
/// ```text
/// canvas <left> <top> <width> <height>
/// shape <name> <rectangle|ellipse>
/// motion <name> <t1 x1 y1 w1 h1 r1 g1 b1> <t2 x2 y2 w2 h2 r2 g2 b2>
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Any error is tagged with its 1-based
/// line number.
pub fn read_animation<B: AnimationBuilder>(src: &str, mut builder: B) -> KeylineResult<B::Output> {
    for (idx, raw) in src.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        read_line(line, &mut builder).map_err(|e| at_line(line_no, e))?;
    }
    builder.build()
}

/// Read a declarative animation file into a model.
pub fn read_animation_file(path: impl AsRef<Path>) -> KeylineResult<AnimationModel> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read animation '{}'", path.display()))?;
    read_animation(&src, ModelBuilder::new())
}

fn read_line<B: AnimationBuilder>(line: &str, builder: &mut B) -> KeylineResult<()> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(());
    };
    let args: Vec<&str> = tokens.collect();
    match keyword {
        "canvas" => {
            let [left, top, width, height] = ints::<4>(keyword, &args)?;
            builder.set_bounds(left, top, width, height)?;
        }
        "shape" => {
            let [name, kind] = arity::<2>(keyword, &args)?;
            builder.declare_shape(name, kind.parse::<ShapeKind>()?)?;
        }
        "motion" => {
            let Some((name, fields)) = args.split_first() else {
                return Err(KeylineError::validation(
                    "motion needs a shape name and 16 integers",
                ));
            };
            let [t1, x1, y1, w1, h1, r1, g1, b1, t2, x2, y2, w2, h2, r2, g2, b2] =
                ints::<MOTION_FIELDS>(keyword, fields)?;
            builder.add_motion(
                name, t1, x1, y1, w1, h1, r1, g1, b1, t2, x2, y2, w2, h2, r2, g2, b2,
            )?;
        }
        other => {
            return Err(KeylineError::validation(format!(
                "unknown keyword '{other}'"
            )));
        }
    }
    Ok(())
}

fn arity<'a, const N: usize>(keyword: &str, args: &[&'a str]) -> KeylineResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| {
        KeylineError::validation(format!(
            "'{keyword}' takes {N} arguments, got {}",
            args.len()
        ))
    })
}

fn ints<const N: usize>(keyword: &str, args: &[&str]) -> KeylineResult<[i32; N]> {
    let tokens = arity::<N>(keyword, args)?;
    let mut out = [0i32; N];
    for (slot, tok) in out.iter_mut().zip(tokens) {
        *slot = tok.parse().map_err(|_| {
            KeylineError::validation(format!("'{keyword}' expects integers, got '{tok}'"))
        })?;
    }
    Ok(out)
}

fn at_line(line_no: usize, err: KeylineError) -> KeylineError {
    match err {
        KeylineError::Validation(m) => KeylineError::Validation(format!("line {line_no}: {m}")),
        KeylineError::State(m) => KeylineError::State(format!("line {line_no}: {m}")),
        KeylineError::Lookup(m) => KeylineError::Lookup(format!("line {line_no}: {m}")),
        KeylineError::Serde(m) => KeylineError::Serde(format!("line {line_no}: {m}")),
        KeylineError::Other(e) => KeylineError::Other(e.context(format!("line {line_no}"))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/reader.rs"]
mod tests;
