use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "keyline", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Export an animation as text, SVG or JSON.
    Export(ExportArgs),
    /// Print the shape states at one tick as JSON.
    Frame(FrameArgs),
    /// Print the id of the topmost shape under a point.
    Pick(PickArgs),
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input animation (`.json` document or declarative text).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output format.
    #[arg(long, value_enum)]
    view: View,

    /// Playback speed in ticks per second (SVG timing).
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input animation (`.json` document or declarative text).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    tick: u32,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Input animation (`.json` document or declarative text).
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long)]
    tick: u32,

    /// Canvas-relative x.
    #[arg(long, allow_hyphen_values = true)]
    x: i32,

    /// Canvas-relative y.
    #[arg(long, allow_hyphen_values = true)]
    y: i32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum View {
    Text,
    Svg,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Export(args) => cmd_export(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Pick(args) => cmd_pick(args),
    }
}

fn read_model(path: &Path) -> anyhow::Result<keyline::AnimationModel> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let model = if is_json {
        keyline::AnimationDoc::from_path(path).and_then(keyline::AnimationDoc::into_model)
    } else {
        keyline::read_animation_file(path)
    };
    model.with_context(|| format!("load animation '{}'", path.display()))
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let model = read_model(&args.in_path)?;
    let rendered = match args.view {
        View::Text => keyline::export_text(&model)?,
        View::Svg => keyline::export_svg(&model, args.speed)?,
        View::Json => keyline::AnimationDoc::from_model(&model)?.to_json()?,
    };

    let Some(out) = args.out else {
        print!("{rendered}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, rendered).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let model = read_model(&args.in_path)?;
    let states = model.shapes_at_tick(keyline::Tick(args.tick))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&states).context("serialize frame")?
    );
    Ok(())
}

fn cmd_pick(args: PickArgs) -> anyhow::Result<()> {
    let model = read_model(&args.in_path)?;
    let id = model.id_of_top_shape(keyline::Tick(args.tick), args.x, args.y)?;
    println!("{id}");
    Ok(())
}
