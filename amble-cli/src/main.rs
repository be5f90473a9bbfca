use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "amble", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate dialogue audio for a scene (requires the TTS credential).
    Audio(AudioArgs),
    /// Resolve a scene and invoke the external renderer.
    Render(RenderArgs),
    /// Evaluate a single frame and dump its scene state as JSON.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct AudioArgs {
    /// Predefined config name (deep|simple|container|default) or a .json path.
    #[arg(default_value = "deep")]
    config: String,

    /// Directory receiving the mp3 clips and the metadata sidecar.
    #[arg(default_value = "public/audio/temp")]
    output_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Composition name passed through to the renderer.
    #[arg(default_value = "JungleWalk")]
    composition: String,

    /// Predefined config name (deep|simple|container|default) or a .json path.
    #[arg(default_value = "deep")]
    config: String,

    /// GL backend flag forwarded to the renderer.
    #[arg(default_value = amble::DEFAULT_GL_FLAG, allow_hyphen_values = true)]
    gl_flag: String,

    /// Output directory for the rendered video.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Predefined config name (deep|simple|container|default) or a .json path.
    #[arg(default_value = "deep")]
    config: String,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Audio(args) => cmd_audio(args),
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

/// Resolve a positional config argument: a `.json` path loads a custom
/// config, anything else must be a predefined name.
fn load_config(arg: &str) -> anyhow::Result<(amble::SceneConfig, String)> {
    if arg.ends_with(".json") {
        let config = amble::SceneConfig::from_path(arg)
            .with_context(|| format!("failed to load config file '{arg}'"))?;
        let name = config.display_name().to_owned();
        Ok((config, name))
    } else {
        let config = amble::by_name(arg)
            .ok_or_else(|| anyhow::anyhow!("unknown config '{arg}' (expected deep|simple|container|default or a .json path)"))?;
        // The default preset contributes no filename prefix; named presets
        // use their display name.
        let name = if arg == "default" {
            "default".to_owned()
        } else {
            config.display_name().to_owned()
        };
        Ok((config, name))
    }
}

fn cmd_audio(args: AudioArgs) -> anyhow::Result<()> {
    let (mut config, name) = match load_config(&args.config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("failed to load config: {e:#}");
            std::process::exit(1);
        }
    };

    eprintln!(
        "generating audio for '{name}' into {}",
        args.output_dir.display()
    );

    let synth = amble::SpeechSynthesizer::new(&args.output_dir)?;
    let metadata = synth.generate_scene_audio(&mut config)?;

    if metadata.is_empty() {
        eprintln!("no audio files were generated");
        std::process::exit(1);
    }
    eprintln!("generated {} audio files", metadata.len());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (config, name) = load_config(&args.config)?;

    let fps = amble::Fps::default_30();
    let resolved = amble::resolve_scene(&config, fps, &amble::FfprobeDurations)?;

    let filename = amble::output_filename(&name, &args.composition);
    let out_path = args.out_dir.join(&filename);
    let scene_json = args
        .out_dir
        .join(format!("{}.scene.json", filename.trim_end_matches(".mp4")));
    amble::write_scene_json(&resolved.config, resolved.total_frames, &scene_json)?;

    eprintln!(
        "rendering {} ({} frames at {} fps) to {}",
        args.composition,
        resolved.total_frames,
        fps.as_f64(),
        out_path.display()
    );

    if let Err(e) = amble::invoke_renderer(&args.composition, &scene_json, &out_path, &args.gl_flag)
    {
        eprintln!("render failed: {e}");
        std::process::exit(1);
    }

    eprintln!("render completed: {}", out_path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (config, _) = load_config(&args.config)?;

    let fps = amble::Fps::default_30();
    // Frame dumps keep the authored nominal timing; duration resolution is a
    // render-time concern.
    let resolved = amble::ResolvedScene::from_authored(config);
    let mut scene = amble::WalkScene::new(resolved, fps, amble::DEFAULT_ENVIRONMENT_SEED)?;
    let state = scene.evaluate(amble::FrameIndex(args.frame));

    let json = serde_json::to_string_pretty(&state)?;
    match args.out {
        Some(path) => {
            amble::ensure_parent_dir(&path)?;
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
