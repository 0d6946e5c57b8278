use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};

use airmouse::config::Config;
use airmouse::gesture::GestureEngine;
use airmouse::session::{CommandPoll, KeyboardPoll, NoCommands, Session};
use airmouse::sink::{ActionSink, DryRunSink, EnigoSink};
use airmouse::source::ReplaySource;

#[derive(Parser, Debug)]
#[command(name = "airmouse")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AIRMOUSE_GIT_HASH"), ")"))]
#[command(about = "Hand-gesture mouse control from a webcam landmark feed")]
struct Cli {
    /// Landmark trace to drive the session: a JSON-lines file, or '-' to
    /// stream from a detector process on stdin
    #[arg(long, value_name = "TRACE")]
    replay: Option<PathBuf>,

    /// Log intents instead of injecting them into the OS
    #[arg(long, action = ArgAction::SetTrue)]
    dry_run: bool,

    /// Screen size for --dry-run, e.g. 1920x1080
    #[arg(long, value_name = "WxH")]
    screen: Option<String>,

    /// Write a commented default config to ~/.config/airmouse/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_screen(spec: &str) -> anyhow::Result<(u32, u32)> {
    let (width, height) = spec
        .split_once(['x', 'X'])
        .with_context(|| format!("Invalid screen size '{spec}', expected WxH"))?;
    let width = width
        .parse::<u32>()
        .with_context(|| format!("Invalid screen width '{width}'"))?;
    let height = height
        .parse::<u32>()
        .with_context(|| format!("Invalid screen height '{height}'"))?;
    if width == 0 || height == 0 {
        anyhow::bail!("Screen dimensions must be non-zero");
    }
    Ok((width, height))
}

fn run_session(config: &Config, trace: &Path, cli: &Cli) -> anyhow::Result<()> {
    let mut sink: Box<dyn ActionSink> = if cli.dry_run {
        let screen = match &cli.screen {
            Some(spec) => parse_screen(spec)?,
            None => (1920, 1080),
        };
        log::info!("dry run: logging intents for a {}x{} screen", screen.0, screen.1);
        Box::new(DryRunSink::new(screen))
    } else {
        Box::new(EnigoSink::new())
    };

    let mut commands: Box<dyn CommandPoll> = if cli.dry_run {
        // No display to poll keys from; replay runs to end of stream.
        Box::new(NoCommands)
    } else {
        Box::new(KeyboardPoll::new())
    };

    let engine = GestureEngine::new(
        config.gesture,
        config.pointer,
        (config.camera.width, config.camera.height),
        sink.screen_size(),
    );

    let mut source = ReplaySource::open(trace, config.camera.width, config.camera.height)
        .with_context(|| format!("Failed to open landmark trace {}", trace.display()))?;

    let mut session = Session::new(engine, sink.as_mut(), commands.as_mut(), config.ui);
    session.run(&mut source)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    if let Some(trace) = &cli.replay {
        log::info!("Starting gesture session from {}", trace.display());
        log::info!("Gestures:");
        log::info!("  - Move cursor: index fingertip");
        log::info!("  - Left click: pinch index + thumb");
        log::info!("  - Right click: pinch middle + thumb");
        log::info!("  - Scroll: hold index + middle together, move up/down");
        log::info!("  - Drag: pinch ring + thumb");
        log::info!("  - Toggle: 'e', quit: 'q'");

        run_session(&config, trace, &cli)?;

        log::info!("Gesture session closed.");
    } else {
        // No flags: show usage
        println!("airmouse: Hand-gesture mouse control from a webcam landmark feed");
        println!();
        println!("Usage:");
        println!("  airmouse --replay <TRACE>     Drive the mouse from a landmark trace");
        println!("  airmouse --replay -           Stream landmarks from stdin");
        println!("  airmouse --replay <TRACE> --dry-run");
        println!("                                Log intents without touching the mouse");
        println!("  airmouse --init-config        Write a commented default config");
        println!("  airmouse --help               Show help");
        println!();
        println!("Live capture:");
        println!("  airmouse consumes normalized hand landmarks as JSON lines, one");
        println!("  record per camera frame. Point any detector that emits");
        println!("  {{\"t\": seconds, \"hand\": {{\"index\": [x, y], ...}}}} at stdin:");
        println!();
        println!("    hand-detector --camera 0 | airmouse --replay -");
        println!();
        println!("Configuration:");
        println!("  ~/.config/airmouse/config.toml (see config.example.toml)");
    }

    Ok(())
}
