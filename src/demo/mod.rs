//! The tutorial screens: shapes wired to sliders and tap animations, as plain data.

pub mod layer;
pub mod screen;
pub mod slider;
