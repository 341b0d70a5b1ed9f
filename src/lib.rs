//! Drawing is a small library of declarative vector shapes.
//!
//! Each shape is a pure function from a bounding [`Rect`] (plus its own parameters) to a
//! [`Path`]: an ordered list of move/line/curve/arc/close instructions. A host strokes or
//! fills the path however it likes.
//!
//! # Animation
//!
//! Shapes whose parameters may change smoothly implement [`Animatable`]. The host
//! interpolates [`Animatable::Data`] between two states (component-wise for
//! [`AnimatablePair`]) and regenerates the path from each intermediate value.
//! [`Transition`] does the frame bookkeeping for hosts that do not have their own timeline.
//!
//! # Layout
//!
//! - **Path**: [`Path`], [`PathCmd`], [`ArcCmd`]
//! - **Shapes**: [`Triangle`], [`Arc`], [`Flower`], [`Trapezoid`], [`CheckerBoard`],
//!   [`Arrow`], [`Circle`], and the tagged [`AnyShape`]
//! - **Color**: [`Hsb`], [`cycle_color`], [`ColorCyclingCircle`]
//! - **Demo**: tutorial [`Screen`]s binding [`Slider`]s and taps to shapes
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod color;
mod demo;
mod foundation;
mod path;
mod shapes;

pub use animation::animatable::{Animatable, AnimatablePair, Lerp};
pub use animation::ease::Ease;
pub use animation::transition::{MAX_FRAMES, Transition};
pub use color::cycle::{
    ColorCyclingCircle, GradientRing, LinearGradient, RING_LINE_WIDTH, cycle_color,
};
pub use color::hsb::Hsb;
pub use demo::layer::{Layer, Paint, Style, svg_document};
pub use demo::screen::{DEFAULT_ANIMATION_SECS, Demo, Screen};
pub use demo::slider::Slider;
pub use foundation::core::{
    Affine, Angle, BezPath, Fps, FrameIndex, Point, Rect, Rgba8Premul, Size, Vec2, parse_rect,
};
pub use foundation::error::{DrawingError, DrawingResult};
pub use foundation::math::Rng64;
pub use path::{ArcCmd, Path, PathCmd, TOLERANCE};
pub use shapes::any::AnyShape;
pub use shapes::arc::Arc;
pub use shapes::arrow::Arrow;
pub use shapes::checkerboard::CheckerBoard;
pub use shapes::circle::Circle;
pub use shapes::flower::{Flower, PETAL_COUNT, PETAL_STEP};
pub use shapes::trapezoid::Trapezoid;
pub use shapes::triangle::Triangle;
pub use shapes::{InsettableShape, Shape, outline};
