use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    animation::keyframe::Keyframe,
    composition::builder::{AnimationBuilder, ModelBuilder},
    foundation::core::Bounds,
    foundation::error::{KeylineError, KeylineResult},
    scene::model::AnimationModel,
    scene::shape::ShapeKind,
};

/// JSON-facing form of an [`AnimationModel`].
///
/// Only keyframes are stored; motions are derived again on load.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationDoc {
    pub bounds: Bounds,
    #[serde(default)]
    pub shapes: Vec<ShapeDoc>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShapeDoc {
    pub id: String,
    pub kind: ShapeKind,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl AnimationDoc {
    pub fn from_model(model: &AnimationModel) -> KeylineResult<Self> {
        let shapes = model
            .entries()
            .map(|(id, entry)| ShapeDoc {
                id: id.to_string(),
                kind: entry.shape.kind,
                keyframes: entry.timeline.keyframes().to_vec(),
            })
            .collect();
        Ok(Self {
            bounds: model.bounds()?,
            shapes,
        })
    }

    /// Rebuild a model, re-checking every invariant along the way.
    ///
    /// Keyframes may appear in any order but must not share a tick.
    pub fn into_model(self) -> KeylineResult<AnimationModel> {
        let Bounds {
            left,
            top,
            width,
            height,
        } = self.bounds;
        let mut builder = ModelBuilder::new();
        builder.set_bounds(left, top, width, height)?;

        for shape in self.shapes {
            builder.declare_shape(&shape.id, shape.kind)?;
            let mut keyframes = shape.keyframes;
            keyframes.sort_by_key(|k| k.tick);
            if let Some(w) = keyframes.windows(2).find(|w| w[0].tick == w[1].tick) {
                return Err(KeylineError::validation(format!(
                    "shape '{}' has two keyframes at tick {}",
                    shape.id, w[0].tick
                )));
            }
            match keyframes.as_slice() {
                [] => {}
                [only] => {
                    builder.motion(&shape.id, *only, *only)?;
                }
                many => {
                    for w in many.windows(2) {
                        builder.motion(&shape.id, w[0], w[1])?;
                    }
                }
            }
        }
        builder.build()
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> KeylineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KeylineError::serde(format!("parse animation JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> KeylineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open animation JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json(&self) -> KeylineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| KeylineError::serde(format!("serialize animation JSON: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
