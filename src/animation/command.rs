use crate::{
    animation::{interp::interpolate, keyframe::Keyframe},
    foundation::core::{Attrs, Tick},
    foundation::error::{KeylineError, KeylineResult},
};

/// Transition between two keyframes of the same shape.
///
/// Inside a model commands are always derived from the keyframe sequence; a standalone command
/// is only authored for bulk ingestion (`AnimationModel::add_command`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MotionCommand {
    pub start: Keyframe,
    pub end: Keyframe,
}

impl MotionCommand {
    pub fn new(start: Keyframe, end: Keyframe) -> KeylineResult<Self> {
        let c = Self { start, end };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> KeylineResult<()> {
        self.start.validate()?;
        self.end.validate()?;
        if self.start.tick > self.end.tick {
            return Err(KeylineError::validation(format!(
                "motion ends (tick {}) before it starts (tick {})",
                self.end.tick, self.start.tick
            )));
        }
        Ok(())
    }

    pub fn start_tick(&self) -> Tick {
        self.start.tick
    }

    pub fn end_tick(&self) -> Tick {
        self.end.tick
    }

    pub fn duration(&self) -> u32 {
        self.end.tick.since(self.start.tick)
    }

    /// Attributes at `tick`; a validation error outside `[start, end]`.
    pub fn state_at(&self, tick: Tick) -> KeylineResult<Attrs> {
        interpolate(tick, &self.start, &self.end)
    }

    /// Whether `next` picks up exactly where this command leaves off.
    pub fn continues_into(&self, next: &MotionCommand) -> bool {
        self.end == next.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/command.rs"]
mod tests;
