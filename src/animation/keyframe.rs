use crate::{
    animation::command::MotionCommand,
    foundation::core::{Attrs, Tick},
    foundation::error::KeylineResult,
};

/// A shape's complete attribute snapshot at one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    pub tick: Tick,
    pub attrs: Attrs,
}

impl Keyframe {
    pub fn new(tick: Tick, attrs: Attrs) -> KeylineResult<Self> {
        let k = Self { tick, attrs };
        k.validate()?;
        Ok(k)
    }

    pub fn validate(&self) -> KeylineResult<()> {
        self.attrs.validate()
    }

    /// The motion from this keyframe to `next`.
    pub fn motion_to(&self, next: &Keyframe) -> MotionCommand {
        MotionCommand {
            start: *self,
            end: *next,
        }
    }
}
