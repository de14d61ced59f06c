use crate::{
    animation::{command::MotionCommand, keyframe::Keyframe},
    foundation::core::{Attrs, Bounds, Tick},
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::{Shape, ShapeKind},
};

/// Construction interface fed by declarative animation input.
///
/// Implementors receive calls in input order: the canvas, then shape declarations, then motions
/// that chain onto earlier motions of the same shape.
pub trait AnimationBuilder {
    type Output;

    fn set_bounds(
        &mut self,
        left: i32,
        top: i32,
        width: i32,
        height: i32,
    ) -> KeylineResult<&mut Self>;

    fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> KeylineResult<&mut Self>;

    #[allow(clippy::too_many_arguments)]
    fn add_motion(
        &mut self,
        name: &str,
        t1: i32,
        x1: i32,
        y1: i32,
        w1: i32,
        h1: i32,
        r1: i32,
        g1: i32,
        b1: i32,
        t2: i32,
        x2: i32,
        y2: i32,
        w2: i32,
        h2: i32,
        r2: i32,
        g2: i32,
        b2: i32,
    ) -> KeylineResult<&mut Self>;

    fn build(self) -> KeylineResult<Self::Output>;
}

/// Builds an [`AnimationModel`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: AnimationModel,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed form of [`AnimationBuilder::add_motion`].
    pub fn motion(&mut self, name: &str, from: Keyframe, to: Keyframe) -> KeylineResult<&mut Self> {
        self.model.add_command(name, MotionCommand::new(from, to)?)?;
        Ok(self)
    }
}

impl AnimationBuilder for ModelBuilder {
    type Output = AnimationModel;

    fn set_bounds(
        &mut self,
        left: i32,
        top: i32,
        width: i32,
        height: i32,
    ) -> KeylineResult<&mut Self> {
        self.model
            .set_bounds(Bounds::new(left, top, width, height)?)?;
        Ok(self)
    }

    fn declare_shape(&mut self, name: &str, kind: ShapeKind) -> KeylineResult<&mut Self> {
        self.model.add_shape(name, Shape::new(kind))?;
        Ok(self)
    }

    fn add_motion(
        &mut self,
        name: &str,
        t1: i32,
        x1: i32,
        y1: i32,
        w1: i32,
        h1: i32,
        r1: i32,
        g1: i32,
        b1: i32,
        t2: i32,
        x2: i32,
        y2: i32,
        w2: i32,
        h2: i32,
        r2: i32,
        g2: i32,
        b2: i32,
    ) -> KeylineResult<&mut Self> {
        let from = Keyframe::new(
            Tick::from_signed(t1)?,
            Attrs::new(x1, y1, w1, h1, r1, g1, b1),
        )?;
        let to = Keyframe::new(
            Tick::from_signed(t2)?,
            Attrs::new(x2, y2, w2, h2, r2, g2, b2),
        )?;
        self.motion(name, from, to)
    }

    fn build(self) -> KeylineResult<AnimationModel> {
        if !self.model.has_bounds() {
            return Err(KeylineError::state(
                "cannot build an animation without canvas bounds",
            ));
        }
        Ok(self.model)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/builder.rs"]
mod tests;
