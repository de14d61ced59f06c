use std::fmt;

use crate::foundation::error::{KeylineError, KeylineResult};

/// Largest value a color channel may take.
pub const CHANNEL_MAX: i32 = 255;

/// Discrete, non-negative unit of animation time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Tick(pub u32);

impl Tick {
    /// Convert a signed tick (as found in declarative input), rejecting negatives.
    pub fn from_signed(t: i32) -> KeylineResult<Self> {
        u32::try_from(t)
            .map(Self)
            .map_err(|_| KeylineError::validation(format!("tick must be >= 0, got {t}")))
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Ticks elapsed since `earlier`, zero if `earlier` is later.
    pub fn since(self, earlier: Tick) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas viewport every shape is placed and rendered within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,  // >= 1
    pub height: i32, // >= 1
}

impl Bounds {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> KeylineResult<Self> {
        let b = Self {
            left,
            top,
            width,
            height,
        };
        b.validate()?;
        Ok(b)
    }

    pub fn validate(&self) -> KeylineResult<()> {
        if self.width < 1 || self.height < 1 {
            return Err(KeylineError::validation(format!(
                "canvas width/height must be >= 1, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn right(&self) -> i64 {
        i64::from(self.left) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.top) + i64::from(self.height)
    }

    /// Whether a shape anchored at `(x, y)` may be placed on this canvas.
    ///
    /// Only the far edges are enforced; shapes may start left of or above the canvas origin.
    pub fn admits(&self, x: i32, y: i32) -> bool {
        i64::from(x) <= self.right() && i64::from(y) <= self.bottom()
    }
}

/// The seven animatable attributes of a shape: position, size and RGB color.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Attrs {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Attrs {
    pub fn new(x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            r,
            g,
            b,
        }
    }

    /// Keyframe-grade check: both dimensions at least 1, channels in `[0, 255]`.
    pub fn validate(&self) -> KeylineResult<()> {
        self.validate_with_min_dim(1)
    }

    /// Snapshot-grade check: dimensions may be zero (a freshly declared shape).
    pub fn validate_snapshot(&self) -> KeylineResult<()> {
        self.validate_with_min_dim(0)
    }

    fn validate_with_min_dim(&self, min_dim: i32) -> KeylineResult<()> {
        if self.w < min_dim || self.h < min_dim {
            return Err(KeylineError::validation(format!(
                "width/height must be >= {min_dim}, got {}x{}",
                self.w, self.h
            )));
        }
        for (name, c) in [("red", self.r), ("green", self.g), ("blue", self.b)] {
            if !(0..=CHANNEL_MAX).contains(&c) {
                return Err(KeylineError::validation(format!(
                    "{name} channel must be in [0, {CHANNEL_MAX}], got {c}"
                )));
            }
        }
        Ok(())
    }

    pub fn to_array(self) -> [i32; 7] {
        [self.x, self.y, self.w, self.h, self.r, self.g, self.b]
    }

    pub fn from_array(v: [i32; 7]) -> Self {
        let [x, y, w, h, r, g, b] = v;
        Self::new(x, y, w, h, r, g, b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
