use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "starfill", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print per-star fill levels as JSON.
    Levels(LevelsArgs),
    /// Render a rating to an SVG or PNG file (chosen by the output extension).
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct StyleArgs {
    /// Settings JSON; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the fill mode.
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Override the number of stars.
    #[arg(long)]
    stars: Option<usize>,

    /// Disable the precise-mode glyph padding correction.
    #[arg(long, default_value_t = false)]
    no_correct: bool,
}

#[derive(Parser, Debug)]
struct LevelsArgs {
    /// Rating value.
    #[arg(long, allow_hyphen_values = true)]
    rating: f64,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Rating value.
    #[arg(long, allow_hyphen_values = true)]
    rating: f64,

    /// Output path ending in `.svg` or `.png`.
    #[arg(long)]
    out: PathBuf,

    /// Text shown after the stars, e.g. "(132)".
    #[arg(long)]
    label: Option<String>,

    /// Font file used to measure glyphs; without it an em-box approximation is used.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Pixel scale for PNG output.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Full,
    Half,
    Precise,
}

impl From<ModeChoice> for starfill::FillMode {
    fn from(value: ModeChoice) -> Self {
        match value {
            ModeChoice::Full => Self::Full,
            ModeChoice::Half => Self::Half,
            ModeChoice::Precise => Self::Precise,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Levels(args) => cmd_levels(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_settings(style: &StyleArgs) -> anyhow::Result<starfill::StarSettings> {
    let mut settings = match &style.config {
        Some(path) => starfill::StarSettings::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?,
        None => starfill::StarSettings::default(),
    };
    if let Some(mode) = style.mode {
        settings.fill_mode = mode.into();
    }
    if let Some(stars) = style.stars {
        settings.total_stars = stars;
    }
    if style.no_correct {
        settings.correct_precise_fill = false;
    }
    settings.validate()?;
    Ok(settings)
}

fn cmd_levels(args: LevelsArgs) -> anyhow::Result<()> {
    let settings = load_settings(&args.style)?;
    let levels = starfill::render_levels(args.rating, &settings);
    let out = serde_json::json!({
        "rating": args.rating,
        "fill_mode": settings.fill_mode,
        "levels": levels,
    });
    println!("{out}");
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let kind = output_kind(&args.out)?;
    let mut settings = load_settings(&args.style)?;

    let layout = match &args.font {
        Some(path) => {
            let mut measurer = starfill::ParleyMeasurer::from_font_file(path)?;
            // Paint with the family that was measured.
            for font in [&mut settings.star_font, &mut settings.label_font] {
                font.family
                    .get_or_insert_with(|| measurer.default_family().to_string());
            }
            starfill::render(args.rating, &settings, args.label.as_deref(), &mut measurer)?
        }
        None => {
            let mut measurer = starfill::EmBoxMeasurer::default();
            starfill::render(args.rating, &settings, args.label.as_deref(), &mut measurer)?
        }
    };
    let ops = starfill::compile_paint_ops(&layout, &settings);
    let svg = starfill::write_svg(&ops, layout.size);

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    match kind {
        OutputKind::Svg => std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?,
        OutputKind::Png => {
            let opts = starfill::RasterOptions {
                scale: args.scale,
                font_dirs: args
                    .font
                    .as_deref()
                    .and_then(Path::parent)
                    .map(Path::to_path_buf)
                    .into_iter()
                    .collect(),
                background: None,
            };
            starfill::rasterize_svg(&svg, &opts)?.save_png(&args.out)?;
        }
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

enum OutputKind {
    Svg,
    Png,
}

fn output_kind(path: &Path) -> anyhow::Result<OutputKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("svg") => Ok(OutputKind::Svg),
        Some("png") => Ok(OutputKind::Png),
        _ => anyhow::bail!(
            "output '{}' must end in .svg or .png",
            path.display()
        ),
    }
}
