pub mod command;
pub mod interp;
pub mod keyframe;
pub mod timeline;
