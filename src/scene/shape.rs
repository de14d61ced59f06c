use std::{fmt, str::FromStr};

use crate::{
    foundation::core::Attrs,
    foundation::error::{KeylineError, KeylineResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    /// Name used by the declarative input and the text export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = KeylineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "ellipse" => Ok(Self::Ellipse),
            other => Err(KeylineError::validation(format!(
                "unknown shape kind '{other}' (expected 'rectangle' or 'ellipse')"
            ))),
        }
    }
}

/// A shape's kind plus its attribute snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub attrs: Attrs,
}

impl Shape {
    /// A freshly declared shape: origin, zero size, black.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            attrs: Attrs::default(),
        }
    }

    pub fn rectangle(attrs: Attrs) -> KeylineResult<Self> {
        attrs.validate()?;
        Ok(Self {
            kind: ShapeKind::Rectangle,
            attrs,
        })
    }

    pub fn ellipse(attrs: Attrs) -> KeylineResult<Self> {
        attrs.validate()?;
        Ok(Self {
            kind: ShapeKind::Ellipse,
            attrs,
        })
    }

    pub fn validate(&self) -> KeylineResult<()> {
        self.attrs.validate_snapshot()
    }

    /// Strict bounding-box hit test.
    ///
    /// Ellipses use their bounding box too, so a click just inside a corner of the box selects
    /// the ellipse.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        match self.kind {
            ShapeKind::Rectangle | ShapeKind::Ellipse => bbox_contains(&self.attrs, px, py),
        }
    }
}

fn bbox_contains(a: &Attrs, px: i32, py: i32) -> bool {
    let (px, py) = (i64::from(px), i64::from(py));
    let (x0, y0) = (i64::from(a.x), i64::from(a.y));
    let (x1, y1) = (x0 + i64::from(a.w), y0 + i64::from(a.h));
    px > x0 && px < x1 && py > y0 && py < y1
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shape.rs"]
mod tests;
