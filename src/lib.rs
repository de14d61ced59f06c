//! keyline is a keyframe timeline engine for 2D shape animation.
//!
//! The public API is model-oriented:
//!
//! - Build an [`AnimationModel`] through a [`ModelBuilder`], the declarative reader, or a JSON
//!   [`AnimationDoc`]
//! - Query interpolated [`ShapeState`]s at any tick, or hit-test a point
//! - Export as text or animated SVG, or drive interactive playback with a [`Player`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod composition;
pub mod eval;
pub mod export;
pub mod foundation;
pub mod playback;
pub mod scene;

pub use crate::animation::command::MotionCommand;
pub use crate::animation::interp::interpolate;
pub use crate::animation::keyframe::Keyframe;
pub use crate::animation::timeline::{Placement, Timeline};
pub use crate::composition::builder::{AnimationBuilder, ModelBuilder};
pub use crate::composition::reader::{read_animation, read_animation_file};
pub use crate::eval::evaluator::{Evaluator, ShapeState};
pub use crate::export::svg::export_svg;
pub use crate::export::text::export_text;
pub use crate::foundation::core::{Attrs, Bounds, Tick};
pub use crate::foundation::error::{KeylineError, KeylineResult};
pub use crate::playback::player::{EditorAction, PlaybackOpts, Player, TickOutcome};
pub use crate::scene::document::{AnimationDoc, ShapeDoc};
pub use crate::scene::model::AnimationModel;
pub use crate::scene::shape::{Shape, ShapeKind};
