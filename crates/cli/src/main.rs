//! Easel CLI - run demo scenes on the headless toolkit.
//!
//! Every scene is driven by scripted clicks and the resulting toolkit
//! operations are printed as JSON.

mod logger;
mod scenes;

use anyhow::{Context, Result};
use canvas::{App, HeadlessToolkit, ToolkitOp};
use clap::{Parser, Subcommand, ValueEnum};
use easel_core::{Point, Settings};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Easel CLI - drawing scenes for beginners, without a screen
#[derive(Parser)]
#[command(name = "easel")]
#[command(about = "Run Easel demo scenes and print what they drew")]
struct Cli {
    /// JSON settings file (window size, colors, click poll interval)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenes
    Scenes,

    /// Run a scene and print its toolkit operations
    Demo {
        /// Name of the scene to run
        scene: String,

        /// Where scripted clicks land, as `x,y`
        #[arg(long, default_value = "200,150", value_parser = parse_point)]
        click: Point,

        /// Print one line per operation instead of a JSON array
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_level != LogLevel::Off {
        logger::EaselLogger::init(cli.log_level.into())?;
    }
    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Scenes => list_scenes(),
        Commands::Demo {
            scene,
            click,
            compact,
        } => {
            let ops = run_demo(&scene, settings, click)?;
            print_ops(&ops, compact)
        }
    }
}

fn list_scenes() -> Result<()> {
    println!("Available scenes:");
    for scene in scenes::SCENES {
        println!("  {:<10} {}", scene.name, scene.description);
    }
    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    logger::log_file_contents(path)?;
    Settings::from_json(&json)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

fn run_demo(name: &str, settings: Settings, click: Point) -> Result<Vec<ToolkitOp>> {
    let scene = scenes::find(name).with_context(|| {
        format!("Unknown scene {name:?}. Run `easel scenes` to see the available scenes.")
    })?;
    logger::log_section(scene.name);

    let toolkit = HeadlessToolkit::new();
    toolkit.set_auto_click(Some(click));
    let app = App::with_settings(toolkit.clone(), settings);
    (scene.run)(&app).with_context(|| format!("Scene {:?} failed", scene.name))?;

    let ops = toolkit.ops();
    log::info!("scene {:?} finished after {} toolkit operations", scene.name, ops.len());
    Ok(ops)
}

fn print_ops(ops: &[ToolkitOp], compact: bool) -> Result<()> {
    if compact {
        for op in ops {
            println!("{}", serde_json::to_string(op)?);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(ops)?);
    }
    Ok(())
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {value:?}"))?;
    let x = x.trim().parse::<f32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f32>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}
