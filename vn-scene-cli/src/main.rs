use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vn-scene", version)]
struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tick a scene and render one frame as a PNG.
    Frame(FrameArgs),
    /// Parse and validate a scene without rendering.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of ticks to run before rendering.
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Milliseconds per tick.
    #[arg(long, default_value_t = 16)]
    tick_ms: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn scene_root(in_path: &Path) -> &Path {
    in_path.parent().unwrap_or_else(|| Path::new("."))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = vn_scene::SceneDef::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    let mut sys = scene.build(scene_root(&args.in_path))?;

    for _ in 0..args.ticks {
        sys.tick(args.tick_ms)?;
    }
    let stats = sys.render_frame()?;
    tracing::info!(drawn = stats.ok, failed = stats.failed, "rendered");

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    sys.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let scene = vn_scene::SceneDef::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;
    scene.validate()?;
    println!(
        "ok: {}x{} screen, {} surfaces, {} objects",
        scene.config.screen_width,
        scene.config.screen_height,
        scene.surfaces.len(),
        scene.objects.len()
    );
    Ok(())
}
