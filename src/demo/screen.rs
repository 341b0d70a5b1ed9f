use std::str::FromStr;

use crate::{
    animation::ease::Ease,
    animation::transition::Transition,
    color::cycle::ColorCyclingCircle,
    demo::layer::{Layer, Paint, svg_document},
    demo::slider::Slider,
    foundation::core::{Angle, Fps, Rect, Rgba8Premul, Size},
    foundation::error::{DrawingError, DrawingResult},
    foundation::math::Rng64,
    shapes::{
        InsettableShape, Shape, any::AnyShape, arc::Arc, arrow::Arrow,
        checkerboard::CheckerBoard, flower::Flower, trapezoid::Trapezoid, triangle::Triangle,
    },
};

const RED: Rgba8Premul = Rgba8Premul {
    r: 255,
    g: 59,
    b: 48,
    a: 255,
};
const BLUE: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 122,
    b: 255,
    a: 255,
};
const BLACK: Rgba8Premul = Rgba8Premul {
    r: 0,
    g: 0,
    b: 0,
    a: 255,
};

/// Duration of an animation started without an explicit curve.
pub const DEFAULT_ANIMATION_SECS: f64 = 0.35;

/// One tutorial screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    /// Arrow stroked with a thickness slider.
    Arrow,
    /// 4×4 board that grows to 8×16 on tap.
    CheckerBoard,
    /// Trapezoid that jumps to a random inset on tap.
    Trapezoid,
    /// Flower with offset and width sliders.
    Flower,
    /// Hue-cycling rings with a rotation slider.
    ColorCycle,
    /// Quarter-plus arc, stroked.
    Arc,
    /// Half-circle arc, stroked inside its frame.
    ArcBorder,
    /// Stroked triangle.
    Triangle,
}

impl Demo {
    /// Every screen.
    pub const ALL: [Demo; 8] = [
        Self::Arrow,
        Self::CheckerBoard,
        Self::Trapezoid,
        Self::Flower,
        Self::ColorCycle,
        Self::Arc,
        Self::ArcBorder,
        Self::Triangle,
    ];

    /// snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Arrow => "arrow",
            Self::CheckerBoard => "checker_board",
            Self::Trapezoid => "trapezoid",
            Self::Flower => "flower",
            Self::ColorCycle => "color_cycle",
            Self::Arc => "arc",
            Self::ArcBorder => "arc_border",
            Self::Triangle => "triangle",
        }
    }

    /// Frame the shape is laid out in.
    pub fn frame(self) -> Size {
        match self {
            Self::Trapezoid => Size::new(200.0, 100.0),
            _ => Size::new(300.0, 300.0),
        }
    }
}

impl FromStr for Demo {
    type Err = DrawingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().replace('-', "_").to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == needle || d.name().replace('_', "") == needle)
            .ok_or_else(|| DrawingError::validation(format!("unknown demo '{s}'")))
    }
}

/// Live state of a [`Demo`]: its slider values and the shape they drive.
#[derive(Clone, Debug)]
pub struct Screen {
    demo: Demo,
    sliders: Vec<Slider>,
    shape: Option<AnyShape>,
    cycle: ColorCyclingCircle,
}

impl Screen {
    /// Screen in its initial state.
    pub fn new(demo: Demo) -> Self {
        let (shape, sliders): (Option<AnyShape>, Vec<Slider>) = match demo {
            Demo::Arrow => (
                Some(AnyShape::Arrow(Arrow::new(2.0))),
                vec![Slider::new("thickness", 2.0..=20.0, 2.0)],
            ),
            Demo::CheckerBoard => (Some(CheckerBoard::new(4, 4).into()), vec![]),
            Demo::Trapezoid => (Some(Trapezoid::new(50.0).into()), vec![]),
            Demo::Flower => {
                let flower = Flower::default();
                (
                    Some(AnyShape::Flower(flower)),
                    vec![
                        Slider::new("offset", -40.0..=40.0, flower.petal_offset),
                        Slider::new("width", 0.0..=100.0, flower.petal_width),
                    ],
                )
            }
            Demo::ColorCycle => (
                None,
                vec![Slider::new("cycle", 0.0..=1.0, 0.0)],
            ),
            Demo::Arc => (
                Some(Arc::new(Angle::degrees(0.0), Angle::degrees(110.0), true).into()),
                vec![],
            ),
            Demo::ArcBorder => (
                Some(
                    Arc::new(Angle::degrees(-90.0), Angle::degrees(90.0), true)
                        .stroke_border(40.0)
                        .into(),
                ),
                vec![],
            ),
            Demo::Triangle => (Some(AnyShape::Triangle(Triangle)), vec![]),
        };
        Self {
            demo,
            sliders,
            shape,
            cycle: ColorCyclingCircle::default(),
        }
    }

    /// Which screen this is.
    pub fn demo(&self) -> Demo {
        self.demo
    }

    /// Slider bindings, empty for tap-driven screens.
    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    /// Shape currently shown (the color-cycle screen has none).
    pub fn shape(&self) -> Option<AnyShape> {
        self.shape
    }

    /// Ring set of the color-cycle screen.
    pub fn color_cycle(&self) -> ColorCyclingCircle {
        self.cycle
    }

    /// Layout rect at the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.demo.frame())
    }

    /// Move slider `label` and rebind its parameter. Returns the clamped value.
    #[tracing::instrument(skip(self), fields(demo = self.demo.name()))]
    pub fn set_slider(&mut self, label: &str, value: f64) -> DrawingResult<f64> {
        let slider = self
            .sliders
            .iter_mut()
            .find(|s| s.label == label)
            .ok_or_else(|| {
                DrawingError::validation(format!(
                    "demo '{}' has no slider '{label}'",
                    self.demo.name()
                ))
            })?;
        let v = slider.set(value);

        match (self.shape.as_mut(), label) {
            (Some(AnyShape::Arrow(a)), "thickness") => a.inset_amount = v,
            (Some(AnyShape::Flower(f)), "offset") => f.petal_offset = v,
            (Some(AnyShape::Flower(f)), "width") => f.petal_width = v,
            (None, "cycle") => self.cycle.amount = v,
            _ => {}
        }
        tracing::debug!(value = v, "slider moved");
        Ok(v)
    }

    /// Animation started by tapping the shape, if the screen reacts to taps.
    ///
    /// The trapezoid picks its target inset in `10..=90` from `seed`.
    pub fn tap(&self, seed: u64, fps: Fps) -> DrawingResult<Option<Transition<AnyShape>>> {
        let Some(from) = self.shape else {
            return Ok(None);
        };
        let target: Option<(AnyShape, f64, Ease)> = match from {
            AnyShape::CheckerBoard(_) => Some((CheckerBoard::new(8, 16).into(), 3.0, Ease::Linear)),
            AnyShape::Trapezoid(_) => {
                let inset = Rng64::new(seed).next_in(10.0, 90.0);
                Some((
                    Trapezoid::new(inset).into(),
                    DEFAULT_ANIMATION_SECS,
                    Ease::default(),
                ))
            }
            _ => None,
        };
        target
            .map(|(to, secs, ease)| Transition::new(from, to, secs, fps, ease))
            .transpose()
    }

    /// Replace the shown shape, e.g. with a frame sampled from [`Screen::tap`].
    pub fn show(&mut self, shape: AnyShape) -> DrawingResult<()> {
        let current = self.shape.as_ref().ok_or_else(|| {
            DrawingError::validation(format!("demo '{}' shows no shape", self.demo.name()))
        })?;
        current.ensure_same_kind(&shape)?;
        self.shape = Some(shape);
        Ok(())
    }

    /// Layers a host would draw for the current state.
    pub fn layers(&self) -> Vec<Layer> {
        let rect = self.rect();
        let Some(shape) = self.shape else {
            return self
                .cycle
                .rings(rect)
                .into_iter()
                .map(|ring| {
                    Layer::stroke(ring.path, Paint::Gradient(ring.gradient), ring.line_width, false)
                })
                .collect();
        };
        match (self.demo, shape) {
            (Demo::Arrow, AnyShape::Arrow(arrow)) => vec![Layer::stroke(
                arrow.path(rect),
                Paint::Solid(RED),
                arrow.stroke_style().width,
                true,
            )],
            (Demo::Flower, shape) => {
                vec![Layer::stroke(shape.path(rect), Paint::Solid(RED), 1.0, false)]
            }
            (Demo::Arc, shape) => {
                vec![Layer::stroke(shape.path(rect), Paint::Solid(BLUE), 10.0, false)]
            }
            (Demo::ArcBorder, shape) => {
                vec![Layer::stroke(shape.path(rect), Paint::Solid(BLUE), 40.0, false)]
            }
            (Demo::Triangle, shape) => {
                vec![Layer::stroke(shape.path(rect), Paint::Solid(RED), 10.0, true)]
            }
            (_, shape) => vec![Layer::fill(shape.path(rect), BLACK)],
        }
    }

    /// SVG document of the current state.
    pub fn to_svg(&self) -> String {
        svg_document(self.demo.frame(), &self.layers())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/screen.rs"]
mod tests;
