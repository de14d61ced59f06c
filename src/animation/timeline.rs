use crate::{
    animation::{command::MotionCommand, keyframe::Keyframe},
    foundation::core::Tick,
    foundation::error::{KeylineError, KeylineResult},
};

/// Where [`Timeline::insert`] put a keyframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// The timeline was empty.
    Sole,
    /// A keyframe already existed at the same tick and was overwritten.
    Replaced(usize),
    /// Before the current first keyframe.
    Prepended,
    /// After the current last keyframe.
    Appended(usize),
    /// Between the two keyframes straddling its tick.
    Inserted(usize),
}

/// Per-shape keyframe sequence plus the command list derived from it.
///
/// Keyframes are the source of truth. `commands` is rebuilt from scratch after every mutation,
/// so `commands[i] == keyframes[i] -> keyframes[i + 1]` always holds.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    keyframes: Vec<Keyframe>, // sorted by tick, unique
    commands: Vec<MotionCommand>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn commands(&self) -> &[MotionCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// First and last keyframe ticks.
    pub fn span(&self) -> Option<(Tick, Tick)> {
        Some((self.keyframes.first()?.tick, self.keyframes.last()?.tick))
    }

    pub fn insert(&mut self, k: Keyframe) -> KeylineResult<Placement> {
        k.validate()?;
        let placement = self.place(k);
        self.rebuild_commands();
        Ok(placement)
    }

    pub fn remove(&mut self, tick: Tick) -> KeylineResult<Keyframe> {
        let idx = self
            .keyframes
            .binary_search_by_key(&tick, |k| k.tick)
            .map_err(|_| KeylineError::lookup(format!("no keyframe at tick {tick}")))?;
        let removed = self.keyframes.remove(idx);
        self.rebuild_commands();
        Ok(removed)
    }

    /// Ingest a legacy motion command, chaining it onto the existing commands.
    ///
    /// On an empty timeline the command contributes both endpoints. Otherwise its start must
    /// equal the last keyframe (tick and attributes) and only its end is appended.
    pub fn push_command(&mut self, cmd: MotionCommand) -> KeylineResult<()> {
        cmd.validate()?;
        match self.keyframes.last() {
            Some(last) if *last != cmd.start => {
                return Err(KeylineError::validation(format!(
                    "continuity mismatch: motion starting at tick {} does not match the last \
                     keyframe at tick {}",
                    cmd.start.tick, last.tick
                )));
            }
            Some(_) => {}
            None => {
                self.place(cmd.start);
            }
        }
        self.place(cmd.end);
        self.rebuild_commands();
        Ok(())
    }

    /// Drop the most recent command together with its trailing keyframe.
    pub fn pop_command(&mut self) -> KeylineResult<MotionCommand> {
        let Some(last) = self.commands.last().copied() else {
            return Err(KeylineError::lookup("no motion to remove"));
        };
        self.keyframes.pop();
        self.rebuild_commands();
        Ok(last)
    }

    /// The adjacent keyframe pair whose ticks bound `tick` inclusively.
    ///
    /// On a shared boundary the earlier pair wins; both give the same attributes there.
    pub fn segment_at(&self, tick: Tick) -> Option<(&Keyframe, &Keyframe)> {
        if self.keyframes.len() < 2 {
            return None;
        }
        let idx = self.keyframes.partition_point(|k| k.tick <= tick);
        let last = self.keyframes.len() - 1;
        match idx {
            0 => None,
            i if i > last => {
                if self.keyframes[last].tick == tick {
                    Some((&self.keyframes[last - 1], &self.keyframes[last]))
                } else {
                    None
                }
            }
            i if self.keyframes[i - 1].tick == tick && i >= 2 => {
                Some((&self.keyframes[i - 2], &self.keyframes[i - 1]))
            }
            i => Some((&self.keyframes[i - 1], &self.keyframes[i])),
        }
    }

    fn place(&mut self, k: Keyframe) -> Placement {
        let len = self.keyframes.len();
        let placement = match self.keyframes.binary_search_by_key(&k.tick, |f| f.tick) {
            _ if len == 0 => {
                self.keyframes.push(k);
                Placement::Sole
            }
            Ok(i) => {
                self.keyframes[i] = k;
                Placement::Replaced(i)
            }
            Err(0) => {
                self.keyframes.insert(0, k);
                Placement::Prepended
            }
            Err(i) if i == len => {
                self.keyframes.push(k);
                Placement::Appended(i)
            }
            Err(i) => {
                self.keyframes.insert(i, k);
                Placement::Inserted(i)
            }
        };
        tracing::debug!(tick = k.tick.0, ?placement, "placed keyframe");
        placement
    }

    fn rebuild_commands(&mut self) {
        self.commands = self
            .keyframes
            .windows(2)
            .map(|w| w[0].motion_to(&w[1]))
            .collect();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
