//! Handtrace - hand-motion recording engine
//!
//! Replays landmark frame streams through the kinematic pipeline and manages
//! the resulting recording sessions.

use handtrace::app::cli::{Cli, Commands, ConfigAction};
use handtrace::app::config::Config;
use handtrace::pipeline::{FrameInput, FramePipeline};
use handtrace::recording::SessionRecorder;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Record {
            input,
            destination,
            limit,
        } => {
            run_record(input, destination, limit, &config)?;
        }
        Commands::List { detailed } => {
            run_list(detailed, &config)?;
        }
        Commands::Delete { name, force } => {
            run_delete(&name, force, &config)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_record(
    input: Option<PathBuf>,
    destination: Option<PathBuf>,
    limit: u64,
    config: &Config,
) -> anyhow::Result<()> {
    let destination_dir = destination.unwrap_or_else(|| config.recording.destination_dir.clone());
    let recorder = SessionRecorder::new(config.recording.scratch_dir.clone(), destination_dir);
    let pipeline = FramePipeline::new(recorder);

    pipeline.start()?;

    // Ctrl+C finalizes instead of abandoning the working file
    let stop_flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
    let stop_flag_handler = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_handler.store(true, std::sync::atomic::Ordering::SeqCst);
    })?;

    let reader: Box<dyn BufRead> = match &input {
        Some(path) => {
            info!(path = %path.display(), "replaying frame stream");
            Box::new(std::io::BufReader::new(std::fs::File::open(path)?))
        }
        None => {
            info!("reading frame stream from stdin (Ctrl+C to stop)");
            Box::new(std::io::BufReader::new(std::io::stdin()))
        }
    };

    let mut seen = 0u64;
    for line in reader.lines() {
        if stop_flag.load(std::sync::atomic::Ordering::SeqCst) {
            info!("stop requested; finalizing");
            break;
        }

        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // A frame the source garbled is isolated, like any per-frame fault
        let frame: FrameInput = match serde_json::from_str(&line) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(error = %e, "skipping unparseable frame");
                continue;
            }
        };

        pipeline.process_frame(&frame)?;
        seen += 1;

        if limit > 0 && seen >= limit {
            info!(limit, "frame limit reached");
            break;
        }
    }

    let frames = pipeline.frames_recorded();
    let final_path = pipeline.finish()?;

    println!("Recorded {} frames to {}", frames, final_path.display());
    Ok(())
}

fn run_list(detailed: bool, config: &Config) -> anyhow::Result<()> {
    let dir = &config.recording.destination_dir;

    if !dir.exists() {
        println!("No recordings found in {}", dir.display());
        println!("Start a recording with: handtrace record");
        return Ok(());
    }

    println!("Recordings in {}:", dir.display());

    let mut entries: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| is_recording_file(&e.path()))
        .collect();

    entries.sort_by_key(|e| e.path());

    for entry in &entries {
        let path = entry.path();
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        if detailed {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    // One header line; the rest are frames.
                    let frames = content.lines().count().saturating_sub(1);
                    let bytes = entry.metadata()?.len();
                    println!("  {}  ({} frames, {} bytes)", file_name, frames, bytes);
                }
                Err(_) => {
                    println!("  {}  (unreadable)", file_name);
                }
            }
        } else {
            println!("  {}", file_name);
        }
    }

    if entries.is_empty() {
        println!("  (none)");
        println!("Start a recording with: handtrace record");
    }

    Ok(())
}

fn run_delete(name: &str, force: bool, config: &Config) -> anyhow::Result<()> {
    let dir = &config.recording.destination_dir;

    // Try exact filename first, then add .csv extension
    let candidates = vec![dir.join(name), dir.join(format!("{}.csv", name))];

    let target = candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| anyhow::anyhow!("Recording '{}' not found in {}", name, dir.display()))?;

    if !force {
        let file_size = std::fs::metadata(&target)?.len();
        println!("Will delete: {} ({} bytes)", target.display(), file_size);
        println!("Use --force to skip this prompt, or re-run with -f");
        return Ok(());
    }

    std::fs::remove_file(&target)?;
    info!("Deleted recording: {}", target.display());
    println!("Deleted: {}", target.display());

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    config.save_default()?;
    println!("Created config at {}", config_path.display());
    println!("\nConfig content:\n{}", config.to_toml()?);

    // Create directories
    std::fs::create_dir_all(&config.recording.scratch_dir)?;
    std::fs::create_dir_all(&config.recording.destination_dir)?;

    println!("\nCreated directories:");
    println!("  Scratch:    {}", config.recording.scratch_dir.display());
    println!("  Recordings: {}", config.recording.destination_dir.display());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({}):\n", Config::default_path().display());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {}", config_path.display());
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {}", config_path.display());
        }
    }

    Ok(())
}

/// Finalized recordings look like `recording-<epoch_millis>.csv`.
fn is_recording_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with("recording-") && name.ends_with(".csv")
}
