//! Command-line demo driver for the lesson playback engine.
//!
//! Simulates the external video player: a producer thread reports progress
//! over a channel while the main thread feeds the engine and prints what
//! the editor would show.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossbeam::channel;
use thiserror::Error;

use codesync::core::time::format_time;
use codesync::{EngineError, LessonCommand, LessonEngine, LessonEvent, LessonLibrary};

#[derive(Parser)]
#[command(name = "codesync")]
#[command(about = "Synchronized coding lesson player")]
#[command(version)]
struct Cli {
    /// Load the lesson catalog from a JSON file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List learning tracks and their lessons
    Tracks,
    /// Show one lesson: metadata, chapters, and sync table
    Show {
        /// Track id, e.g. python-fundamentals
        track: String,
        /// Lesson id, e.g. python-basics
        video: String,
    },
    /// Simulate playback of a lesson and watch the editor sync
    Play {
        track: String,
        video: String,
        /// Progress step per player tick, in percent
        #[arg(long, default_value = "1.0")]
        step: f64,
        /// Milliseconds between player ticks
        #[arg(long, default_value = "10")]
        tick_ms: u64,
    },
    /// Dump the catalog as JSON
    Export {
        /// Restrict the dump to a single track
        #[arg(long)]
        track: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read library file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid library file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("unknown track: {0}")]
    UnknownTrack(String),
    #[error("unknown video: {0}")]
    UnknownVideo(String),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let library = match &cli.library {
        Some(path) => LessonLibrary::from_json(&std::fs::read_to_string(path)?)?,
        None => LessonLibrary::builtin(),
    };

    match cli.command {
        Commands::Tracks => {
            list_tracks(&library);
            Ok(())
        }
        Commands::Show { track, video } => show_lesson(&library, &track, &video),
        Commands::Play { track, video, step, tick_ms } => play_lesson(library, &track, &video, step, tick_ms),
        Commands::Export { track } => export_catalog(&library, track.as_deref()),
    }
}

fn list_tracks(library: &LessonLibrary) {
    for track in library.tracks() {
        println!("{}  {} ({}, ~{}h)", track.id, track.title, track.skill_level, track.estimated_hours);
        for (index, video) in track.videos.iter().enumerate() {
            let synced = if video.sync_points.is_empty() { " " } else { "*" };
            println!("  {:02} {} [{}]{} {}", index + 1, video.id, video.duration, synced, video.title);
        }
    }
}

fn show_lesson(library: &LessonLibrary, track_id: &str, video_id: &str) -> Result<(), CliError> {
    let track = library
        .track(track_id)
        .ok_or_else(|| CliError::UnknownTrack(track_id.to_string()))?;
    let video = track
        .video(video_id)
        .ok_or_else(|| CliError::UnknownVideo(video_id.to_string()))?;

    println!("{} ({})", video.title, video.duration);
    if let Some(difficulty) = video.difficulty {
        println!("difficulty: {}", difficulty.name());
    }
    if !video.technologies.is_empty() {
        println!("technologies: {}", video.technologies.join(", "));
    }
    if let Some(description) = &video.description {
        println!("{}", description);
    }

    if !video.chapters.is_empty() {
        println!("\nchapters:");
        for (index, chapter) in video.chapters.iter().enumerate() {
            println!("  {:02} {} {}", index + 1, format_time(chapter.timestamp), chapter.title);
        }
    }

    if !video.sync_points.is_empty() {
        println!("\nsync table:");
        for point in &video.sync_points {
            let hint = if point.hint.is_some() { ", hinted" } else { "" };
            println!(
                "  {} {:9} {}{}",
                format_time(point.video_timestamp),
                point.action.name(),
                point.section,
                hint
            );
        }
    }

    Ok(())
}

fn play_lesson(
    library: LessonLibrary,
    track_id: &str,
    video_id: &str,
    step: f64,
    tick_ms: u64,
) -> Result<(), CliError> {
    let mut engine = LessonEngine::new(library);
    engine.process_command(LessonCommand::SelectTrack(track_id.to_string()))?;
    engine.process_command(LessonCommand::SelectVideo(video_id.to_string()))?;

    let duration = engine.current_video().map(|video| video.duration_secs()).unwrap_or(0);
    println!("playing {}/{} ({})", track_id, video_id, format_time(duration));

    // The simulated player: reports progress until the lesson ends or the
    // receiver goes away.
    let (sender, receiver) = channel::unbounded();
    let player = thread::spawn(move || {
        let mut progress = 0.0;
        while progress <= 100.0 {
            if sender.send(LessonCommand::ReportProgress(progress)).is_err() {
                return;
            }
            progress += step;
            thread::sleep(Duration::from_millis(tick_ms));
        }
    });

    for command in receiver {
        let events = engine.process_command(command)?;
        for event in &events {
            print_event(&engine, duration, event);
        }
    }
    let _ = player.join();

    println!("\nfinal editor ({}):", engine.stage().language());
    println!("{}", engine.stage().code());
    if let Some(hint) = engine.stage().hint() {
        println!("\nhint: {}", hint);
    }

    Ok(())
}

fn print_event(engine: &LessonEngine, duration: u32, event: &LessonEvent) {
    let position = codesync::playback::progress::elapsed_seconds(engine.session().progress, duration);
    let stamp = format_time(position.max(0.0) as u32);

    match event {
        LessonEvent::CodeProjected { section, hint } => {
            println!("[{}] code -> {}", stamp, section);
            if let Some(hint) = hint {
                println!("[{}] hint: {}", stamp, hint);
            }
        }
        LessonEvent::ChallengeActivated { section } => {
            println!("[{}] challenge: {}", stamp, section);
        }
        other => println!("[{}] {:?}", stamp, other),
    }
}

fn export_catalog(library: &LessonLibrary, track_id: Option<&str>) -> Result<(), CliError> {
    let json = match track_id {
        Some(track_id) => {
            let track = library
                .track(track_id)
                .ok_or_else(|| CliError::UnknownTrack(track_id.to_string()))?;
            serde_json::to_string_pretty(track)?
        }
        None => library.to_json()?,
    };
    println!("{}", json);
    Ok(())
}
