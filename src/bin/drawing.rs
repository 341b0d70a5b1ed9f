use std::io::Write as _;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use drawing::{
    AnyShape, ColorCyclingCircle, Demo, Ease, Fps, Layer, Paint, Rect, Rgba8Premul, Screen, Shape,
    Transition, parse_rect, svg_document,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "drawing", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the path of one shape.
    Path(PathArgs),
    /// Print one path per frame while a shape animates between two states.
    Animate(AnimateArgs),
    /// Print the gradient stops of a color-cycling circle.
    Colors(ColorsArgs),
    /// Print a tutorial screen as an SVG document.
    Demo(DemoArgs),
    /// List tutorial screens and their sliders.
    Demos,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// SVG path data.
    Svg,
    /// Instruction list as JSON.
    Json,
    /// Standalone SVG document.
    Document,
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Shape as JSON, e.g. '{"kind":"trapezoid","inset_amount":50}'.
    #[arg(long)]
    shape: AnyShape,

    /// Bounding rect as x,y,w,h.
    #[arg(long, default_value = "0,0,300,300", value_parser = parse_rect)]
    rect: Rect,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Start state as shape JSON.
    #[arg(long)]
    from: AnyShape,

    /// End state as shape JSON (same kind as --from).
    #[arg(long)]
    to: AnyShape,

    /// Duration in seconds.
    #[arg(long, default_value_t = drawing::DEFAULT_ANIMATION_SECS)]
    duration: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Easing curve (linear, in_quad, out_quad, in_out_quad, in_cubic, out_cubic, in_out_cubic).
    #[arg(long, default_value = "in_out_quad")]
    ease: Ease,

    /// Bounding rect as x,y,w,h.
    #[arg(long, default_value = "0,0,300,300", value_parser = parse_rect)]
    rect: Rect,
}

#[derive(Parser, Debug)]
struct ColorsArgs {
    /// Number of rings.
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Hue rotation in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    amount: f64,

    /// Emit an SVG document of the rings instead of a stop table.
    #[arg(long)]
    svg: bool,

    /// Bounding rect for --svg, as x,y,w,h.
    #[arg(long, default_value = "0,0,300,300", value_parser = parse_rect)]
    rect: Rect,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Screen name (see `drawing demos`).
    name: Demo,

    /// Slider assignment `label=value`; may be repeated.
    #[arg(long = "set", value_parser = parse_assignment)]
    sets: Vec<(String, f64)>,

    /// Tap the shape with this seed and print the final frame of the resulting animation.
    #[arg(long)]
    tap: Option<u64>,
}

fn parse_assignment(s: &str) -> Result<(String, f64), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected label=value, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("slider value '{value}': {e}"))?;
    Ok((label.trim().to_owned(), value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Colors(args) => cmd_colors(args),
        Command::Demo(args) => cmd_demo(args),
        Command::Demos => cmd_demos(),
    }
}

#[tracing::instrument(skip_all, fields(kind = args.shape.kind()))]
fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let path = args.shape.path(args.rect);
    tracing::debug!(cmds = path.len(), "generated path");

    let mut out = std::io::stdout().lock();
    match args.format {
        Format::Svg => writeln!(out, "{}", path.to_svg())?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &path).context("serialize path")?;
            writeln!(out)?;
        }
        Format::Document => {
            let size = args.rect.size();
            let black = Rgba8Premul::from_straight_rgba(0, 0, 0, 255);
            let layer = Layer::stroke(path, Paint::Solid(black), 1.0, false);
            write!(out, "{}", svg_document(size, &[layer]))?;
        }
    }
    Ok(())
}

#[tracing::instrument(skip_all, fields(kind = args.from.kind()))]
fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    args.from.ensure_same_kind(&args.to)?;
    let fps = Fps::new(args.fps, 1)?;
    let transition = Transition::new(args.from, args.to, args.duration, fps, args.ease)?;

    let mut out = std::io::stdout().lock();
    for shape in transition.frames() {
        writeln!(out, "{}", shape.path(args.rect).to_svg())?;
    }
    Ok(())
}

fn cmd_colors(args: ColorsArgs) -> anyhow::Result<()> {
    let circle = ColorCyclingCircle {
        amount: args.amount,
        steps: args.steps,
    };

    let mut out = std::io::stdout().lock();
    if args.svg {
        let layers: Vec<Layer> = circle
            .rings(args.rect)
            .into_iter()
            .map(|ring| {
                Layer::stroke(ring.path, Paint::Gradient(ring.gradient), ring.line_width, false)
            })
            .collect();
        write!(out, "{}", svg_document(args.rect.size(), &layers))?;
        return Ok(());
    }

    for index in 0..args.steps {
        let (top, bottom) = (circle.color(index, 1.0), circle.color(index, 0.5));
        writeln!(
            out,
            "{index}\t{:.4}\t{}\t{}",
            top.hue,
            top.to_hex(),
            bottom.to_hex()
        )?;
    }
    Ok(())
}

#[tracing::instrument(skip_all, fields(demo = args.name.name()))]
fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut screen = Screen::new(args.name);
    for (label, value) in &args.sets {
        screen
            .set_slider(label, *value)
            .with_context(|| format!("set slider '{label}'"))?;
    }

    if let Some(seed) = args.tap {
        let fps = Fps::new(60, 1)?;
        let transition = screen
            .tap(seed, fps)?
            .with_context(|| format!("demo '{}' does not react to taps", args.name.name()))?;
        tracing::debug!(frames = transition.frame_count(), "tap animation");
        if let Some(last) = transition.frames().last() {
            screen.show(last)?;
        }
    }

    let mut out = std::io::stdout().lock();
    write!(out, "{}", screen.to_svg())?;
    Ok(())
}

fn cmd_demos() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for demo in Demo::ALL {
        let screen = Screen::new(demo);
        let sliders: Vec<String> = screen
            .sliders()
            .iter()
            .map(|s| {
                format!(
                    "{}={} [{}..={}]",
                    s.label,
                    s.value(),
                    s.range.start(),
                    s.range.end()
                )
            })
            .collect();
        writeln!(out, "{}\t{}", demo.name(), sliders.join(" "))?;
    }
    Ok(())
}
