use std::time::Duration;

use crate::{
    animation::keyframe::Keyframe,
    eval::evaluator::ShapeState,
    foundation::core::Tick,
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::{Shape, ShapeKind},
};

/// Initial playback settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlaybackOpts {
    /// Ticks per second.
    pub speed: u32,
    pub looping: bool,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            speed: 1,
            looping: false,
        }
    }
}

/// What a call to [`Player::handle_tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or not started yet; the tick is unchanged.
    Held,
    Advanced(Tick),
    /// The final tick was reached with looping on; playback is back at tick 1.
    Looped,
    /// The final tick was reached with looping off; playback is now paused.
    Finished,
}

/// Commands an interactive editor can issue against a [`Player`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorAction {
    TogglePause,
    SpeedUp,
    SlowDown,
    ToggleLooping,
    Restart,
    /// Declare a new shape and select it.
    AddShape { id: String, kind: ShapeKind },
    RemoveSelected,
    AddKeyframe(Keyframe),
    DeleteKeyframe(Tick),
}

/// Playback and editing state over an owned model.
///
/// The player never owns a clock: a driver calls [`Player::handle_tick`] every
/// [`Player::interval`] and renders [`Player::frame`].
#[derive(Clone, Debug)]
pub struct Player {
    model: AnimationModel,
    speed: u32,
    looping: bool,
    tick: Tick,
    paused: bool,
    started: bool,
    selected: Option<String>,
}

impl Player {
    pub fn new(model: AnimationModel, opts: PlaybackOpts) -> KeylineResult<Self> {
        if opts.speed < 1 {
            return Err(KeylineError::validation("playback speed must be >= 1"));
        }
        Ok(Self {
            model,
            speed: opts.speed,
            looping: opts.looping,
            tick: Tick(0),
            paused: false,
            started: false,
            selected: None,
        })
    }

    pub fn play(&mut self) -> KeylineResult<()> {
        if self.started {
            return Err(KeylineError::state("playback has already started"));
        }
        self.started = true;
        tracing::debug!(speed = self.speed, looping = self.looping, "playback started");
        Ok(())
    }

    /// Advance playback by one clock pulse.
    pub fn handle_tick(&mut self) -> TickOutcome {
        if !self.started || self.paused {
            return TickOutcome::Held;
        }
        let final_tick = self.model.final_tick().unwrap_or(Tick(0));
        if self.tick >= final_tick {
            if self.looping {
                self.tick = Tick(1);
                tracing::debug!(final_tick = final_tick.0, "looped");
                return TickOutcome::Looped;
            }
            self.paused = true;
            tracing::debug!(final_tick = final_tick.0, "finished");
            return TickOutcome::Finished;
        }
        self.tick = self.tick.next();
        TickOutcome::Advanced(self.tick)
    }

    /// Toggle the pause flag. Paused pulses are dropped, not buffered.
    pub fn pause(&mut self) {
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, tick = self.tick.0, "pause toggled");
    }

    pub fn restart(&mut self) -> KeylineResult<()> {
        if !self.started {
            return Err(KeylineError::state("cannot restart before playback has started"));
        }
        self.tick = Tick(1);
        Ok(())
    }

    pub fn increase_speed(&mut self) {
        self.speed = self.speed.saturating_add(1);
        tracing::debug!(speed = self.speed, "speed changed");
    }

    pub fn decrease_speed(&mut self) -> KeylineResult<()> {
        if self.speed <= 1 {
            return Err(KeylineError::state("speed cannot drop below 1"));
        }
        self.speed -= 1;
        tracing::debug!(speed = self.speed, "speed changed");
        Ok(())
    }

    pub fn toggle_looping(&mut self) {
        self.looping = !self.looping;
    }

    /// Select the topmost shape under a canvas-relative click at the current tick.
    pub fn handle_pointer_click(&mut self, x: i32, y: i32) -> KeylineResult<String> {
        let id = self.model.id_of_top_shape(self.tick, x, y)?;
        self.selected = Some(id.clone());
        Ok(id)
    }

    pub fn apply(&mut self, action: EditorAction) -> KeylineResult<()> {
        match action {
            EditorAction::TogglePause => self.pause(),
            EditorAction::SpeedUp => self.increase_speed(),
            EditorAction::SlowDown => self.decrease_speed()?,
            EditorAction::ToggleLooping => self.toggle_looping(),
            EditorAction::Restart => self.restart()?,
            EditorAction::AddShape { id, kind } => {
                self.model.add_shape(&id, Shape::new(kind))?;
                self.selected = Some(id);
            }
            EditorAction::RemoveSelected => {
                let id = self.require_selection()?.to_string();
                self.model.remove_shape(&id)?;
                self.selected = None;
            }
            EditorAction::AddKeyframe(k) => {
                let id = self.require_selection()?.to_string();
                self.model.add_keyframe(&id, k)?;
            }
            EditorAction::DeleteKeyframe(tick) => {
                let id = self.require_selection()?.to_string();
                self.model.delete_keyframe(&id, tick)?;
            }
        }
        Ok(())
    }

    /// Shape states at the current tick.
    pub fn frame(&self) -> KeylineResult<Vec<ShapeState>> {
        self.model.shapes_at_tick(self.tick)
    }

    /// Time between clock pulses at the current speed.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.speed))
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn model(&self) -> &AnimationModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AnimationModel {
        &mut self.model
    }

    pub fn into_model(self) -> AnimationModel {
        self.model
    }

    fn require_selection(&self) -> KeylineResult<&str> {
        self.selected
            .as_deref()
            .ok_or_else(|| KeylineError::lookup("no shape is selected"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
