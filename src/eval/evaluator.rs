use crate::{
    animation::interp::interpolate,
    foundation::core::{Attrs, Tick},
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::{Shape, ShapeKind},
};

/// One shape's interpolated attributes at a queried tick.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ShapeState {
    pub id: String,
    pub kind: ShapeKind,
    pub attrs: Attrs,
}

impl ShapeState {
    pub fn shape(&self) -> Shape {
        Shape {
            kind: self.kind,
            attrs: self.attrs,
        }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        self.shape().contains(px, py)
    }
}

pub struct Evaluator;

impl Evaluator {
    /// Every shape visible at `tick`, in stacking order.
    ///
    /// A shape is visible when its keyframe span covers `tick`; shapes with fewer than two
    /// keyframes never are.
    #[tracing::instrument(skip(model))]
    pub fn shapes_at_tick(model: &AnimationModel, tick: Tick) -> KeylineResult<Vec<ShapeState>> {
        let mut out = Vec::with_capacity(model.len());
        for (id, entry) in model.entries() {
            let Some((from, to)) = entry.timeline.segment_at(tick) else {
                continue;
            };
            out.push(ShapeState {
                id: id.to_string(),
                kind: entry.shape.kind,
                attrs: interpolate(tick, from, to)?,
            });
        }
        Ok(out)
    }

    /// Id of the front-most shape under the canvas-relative point `(x, y)` at `tick`.
    #[tracing::instrument(skip(model))]
    pub fn id_of_top_shape(
        model: &AnimationModel,
        tick: Tick,
        x: i32,
        y: i32,
    ) -> KeylineResult<String> {
        let bounds = model.bounds()?;
        let px = x.saturating_add(bounds.left);
        let py = y.saturating_add(bounds.top);

        Self::shapes_at_tick(model, tick)?
            .into_iter()
            .rev()
            .find(|s| s.contains(px, py))
            .map(|s| s.id)
            .ok_or_else(|| {
                KeylineError::lookup(format!("no shape under ({x}, {y}) at tick {tick}"))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
