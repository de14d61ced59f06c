use indexmap::IndexMap;

use crate::{
    animation::{command::MotionCommand, keyframe::Keyframe, timeline::Timeline},
    eval::evaluator::{Evaluator, ShapeState},
    foundation::core::{Bounds, Tick},
    foundation::error::{KeylineError, KeylineResult},
    scene::shape::Shape,
};

#[derive(Clone, Debug)]
pub(crate) struct ShapeEntry {
    pub(crate) shape: Shape,
    pub(crate) timeline: Timeline,
}

/// Canvas bounds plus every shape and its timeline, in insertion order.
///
/// Insertion order doubles as stacking order: later shapes render in front and win hit-tests.
/// All accessors hand out owned copies.
#[derive(Clone, Debug, Default)]
pub struct AnimationModel {
    bounds: Option<Bounds>,
    shapes: IndexMap<String, ShapeEntry>,
}

impl AnimationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only reachable through [`crate::ModelBuilder`].
    pub(crate) fn set_bounds(&mut self, bounds: Bounds) -> KeylineResult<()> {
        if self.bounds.is_some() {
            return Err(KeylineError::state("canvas bounds are already set"));
        }
        bounds.validate()?;
        self.bounds = Some(bounds);
        Ok(())
    }

    pub fn bounds(&self) -> KeylineResult<Bounds> {
        self.bounds
            .ok_or_else(|| KeylineError::state("canvas bounds have not been set"))
    }

    pub fn has_bounds(&self) -> bool {
        self.bounds.is_some()
    }

    #[tracing::instrument(skip(self, shape), fields(kind = %shape.kind))]
    pub fn add_shape(&mut self, id: &str, shape: Shape) -> KeylineResult<()> {
        let bounds = self.bounds()?;
        if id.trim().is_empty() {
            return Err(KeylineError::validation("shape id must be non-empty"));
        }
        if self.shapes.contains_key(id) {
            return Err(KeylineError::validation(format!(
                "shape id '{id}' is already in use"
            )));
        }
        shape.validate()?;
        if !bounds.admits(shape.attrs.x, shape.attrs.y) {
            return Err(KeylineError::validation(format!(
                "shape '{id}' at ({}, {}) lies beyond the canvas",
                shape.attrs.x, shape.attrs.y
            )));
        }
        self.shapes.insert(
            id.to_string(),
            ShapeEntry {
                shape,
                timeline: Timeline::new(),
            },
        );
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_shape(&mut self, id: &str) -> KeylineResult<()> {
        self.shapes
            .shift_remove(id)
            .map(|_| ())
            .ok_or_else(|| KeylineError::unknown_shape(id))
    }

    #[tracing::instrument(skip(self, k), fields(tick = k.tick.0))]
    pub fn add_keyframe(&mut self, id: &str, k: Keyframe) -> KeylineResult<()> {
        self.entry_mut(id)?.timeline.insert(k)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn delete_keyframe(&mut self, id: &str, tick: Tick) -> KeylineResult<()> {
        self.entry_mut(id)?.timeline.remove(tick)?;
        Ok(())
    }

    /// Ingest a motion for `id`; it must start at the shape's last keyframe.
    #[tracing::instrument(skip(self, cmd), fields(start = cmd.start.tick.0, end = cmd.end.tick.0))]
    pub fn add_command(&mut self, id: &str, cmd: MotionCommand) -> KeylineResult<()> {
        self.entry_mut(id)?.timeline.push_command(cmd)
    }

    #[tracing::instrument(skip(self))]
    pub fn remove_last_command(&mut self, id: &str) -> KeylineResult<()> {
        self.entry_mut(id)?.timeline.pop_command()?;
        Ok(())
    }

    pub fn keyframes(&self, id: &str) -> KeylineResult<Vec<Keyframe>> {
        Ok(self.entry(id)?.timeline.keyframes().to_vec())
    }

    pub fn commands(&self, id: &str) -> KeylineResult<Vec<MotionCommand>> {
        Ok(self.entry(id)?.timeline.commands().to_vec())
    }

    /// The shape as it stands at its first keyframe, or its declaration snapshot while it has
    /// no keyframes.
    pub fn shape(&self, id: &str) -> KeylineResult<Shape> {
        let entry = self.entry(id)?;
        Ok(match entry.timeline.keyframes().first() {
            Some(first) => Shape {
                kind: entry.shape.kind,
                attrs: first.attrs,
            },
            None => entry.shape,
        })
    }

    /// Shape ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.shapes.keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.shapes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Latest end tick over every command, `None` when nothing moves.
    pub fn final_tick(&self) -> Option<Tick> {
        self.shapes
            .values()
            .filter_map(|e| e.timeline.commands().last())
            .map(|c| c.end.tick)
            .max()
    }

    pub fn shapes_at_tick(&self, tick: Tick) -> KeylineResult<Vec<ShapeState>> {
        Evaluator::shapes_at_tick(self, tick)
    }

    pub fn id_of_top_shape(&self, tick: Tick, x: i32, y: i32) -> KeylineResult<String> {
        Evaluator::id_of_top_shape(self, tick, x, y)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &ShapeEntry)> {
        self.shapes.iter().map(|(id, e)| (id.as_str(), e))
    }

    fn entry(&self, id: &str) -> KeylineResult<&ShapeEntry> {
        self.shapes
            .get(id)
            .ok_or_else(|| KeylineError::unknown_shape(id))
    }

    fn entry_mut(&mut self, id: &str) -> KeylineResult<&mut ShapeEntry> {
        self.bounds()?;
        self.shapes
            .get_mut(id)
            .ok_or_else(|| KeylineError::unknown_shape(id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
