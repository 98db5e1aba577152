//! Snowflake CLI - record career track progress and see which titles it unlocks.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use snowflake_core::{Catalog, Category, TrackId, HIGHEST_MILESTONE};
use snowflake_progress::{category_points, NavigationKey, ProgressState};
use snowflake_storage::{EvaluationStore, JsonFileStore};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "snowflake")]
#[command(about = "Career track progress and title eligibility", long_about = None)]
struct Cli {
    /// Evaluation file to read and update
    #[arg(long, global = true, default_value = "evaluation.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the evaluation summary
    Show,
    /// List tracks with their current milestone
    Tracks,
    /// Show one track's milestone ladder
    Track {
        /// Track key or display name
        track: String,
    },
    /// Set a track's milestone
    Set {
        /// Track key or display name
        track: String,
        /// Milestone level
        level: u8,
    },
    /// Select a title (falls back to the first eligible title)
    Title {
        /// Title label
        title: String,
    },
    /// Set the display name
    Name {
        /// Name
        name: String,
    },
    /// List titles the evaluation qualifies for
    Titles,
    /// Replay cursor key presses
    Keys {
        /// Track to start on
        #[arg(long)]
        focus: Option<String>,
        /// Keys to apply in order
        #[arg(value_enum, required = true)]
        keys: Vec<Key>,
    },
    /// Import an evaluation file into the current one
    Import {
        /// File to import
        source: PathBuf,
    },
    /// Export the current evaluation to another file
    Export {
        /// Destination file
        dest: PathBuf,
    },
}

/// Keyboard keys understood by `keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Key {
    /// Next track
    Right,
    /// Previous track
    Left,
    /// Raise milestone
    Up,
    /// Lower milestone
    Down,
}

impl From<Key> for NavigationKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Right => NavigationKey::NextTrack,
            Key::Left => NavigationKey::PrevTrack,
            Key::Up => NavigationKey::IncreaseMilestone,
            Key::Down => NavigationKey::DecreaseMilestone,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // WARN by default, RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let mut store = JsonFileStore::new(&cli.file);
    let mut state = ProgressState::new(Arc::new(Catalog::standard()));
    if store.import_into(&mut state).await? {
        debug!("Loaded {}", cli.file.display());
    }

    match cli.command {
        Commands::Show => print_summary(&state),
        Commands::Tracks => print_tracks(&state),
        Commands::Track { track } => {
            let track = parse_track(state.catalog(), &track)?;
            print_ladder(&state, track);
        }
        Commands::Set { track, level } => {
            let track = parse_track(state.catalog(), &track)?;
            if level > HIGHEST_MILESTONE {
                bail!("Milestone must be between 0 and {}", HIGHEST_MILESTONE);
            }
            state.navigator().handle_track_milestone_change(track, level);
            store.export_from(&state).await?;
            print_summary(&state);
        }
        Commands::Title { title } => {
            state.set_title(&title);
            if state.snapshot().title != title {
                println!("'{}' is not eligible, title set to '{}'", title, state.snapshot().title);
            }
            store.export_from(&state).await?;
        }
        Commands::Name { name } => {
            state.set_name(name);
            store.export_from(&state).await?;
        }
        Commands::Titles => {
            for title in state.eligible_titles() {
                let marker = if title == state.snapshot().title { "*" } else { " " };
                println!("{} {}", marker, title);
            }
        }
        Commands::Keys { focus, keys } => {
            if let Some(focus) = focus {
                let track = parse_track(state.catalog(), &focus)?;
                state.navigator().set_focused_track_id(track);
            }
            state.navigator().apply_all(keys.into_iter().map(NavigationKey::from));
            store.export_from(&state).await?;
            print_ladder(&state, state.snapshot().focused_track);
        }
        Commands::Import { source } => {
            let source_store = JsonFileStore::new(&source);
            if !source_store.import_into(&mut state).await? {
                bail!("{} does not exist", source.display());
            }
            store.export_from(&state).await?;
            info!("Imported {} into {}", source.display(), cli.file.display());
            print_summary(&state);
        }
        Commands::Export { dest } => {
            let mut dest_store = JsonFileStore::new(&dest);
            dest_store.export_from(&state).await?;
            println!("Exported to {}", dest.display());
        }
    }

    Ok(())
}

/// Resolve a track by key (`OrgDesign`) or display name (`org design`).
fn parse_track(catalog: &Catalog, input: &str) -> Result<TrackId> {
    if let Some(track) = catalog.track_by_key(input) {
        return Ok(track);
    }
    catalog
        .tracks()
        .iter()
        .find(|t| t.display_name.eq_ignore_ascii_case(input) || t.id.as_str().eq_ignore_ascii_case(input))
        .map(|t| t.id)
        .ok_or_else(|| anyhow::anyhow!("Unknown track: {}", input))
}

fn print_summary(state: &ProgressState) {
    let snapshot = state.snapshot();
    let summary = state.point_summary();

    let name = if snapshot.name.is_empty() { "(unnamed)" } else { snapshot.name.as_str() };
    println!("{}", name);
    println!("  Title: {}", snapshot.title);
    println!("  Points: {} / {}", summary.total_points, summary.max_points);
    match (&summary.next_level, summary.points_to_next_level) {
        (Some(next), Some(points)) => {
            println!("  Level: {} ({} points to {})", summary.level, points, next)
        }
        _ => println!("  Level: {}", summary.level),
    }

    let by_category = category_points(state.catalog(), &snapshot.milestone_by_track);
    for category in Category::ALL {
        println!("  {:<14} {}", category.display_name(), by_category.get(&category).copied().unwrap_or(0));
    }
}

fn print_tracks(state: &ProgressState) {
    let focused = state.snapshot().focused_track;
    for category in Category::ALL {
        println!("{}", category.display_name());
        for track in state.catalog().tracks_in(category) {
            let level = state.milestone(track.id);
            let marker = if track.id == focused { ">" } else { " " };
            println!(
                "{} {:<20} {:<18} {}{}",
                marker,
                track.display_name,
                track.id.as_str(),
                "#".repeat(level as usize),
                ".".repeat((HIGHEST_MILESTONE - level) as usize),
            );
        }
    }
}

fn print_ladder(state: &ProgressState, track: TrackId) {
    let definition = state.catalog().definition_of(track);
    let current = state.milestone(track);

    println!("{} ({})", definition.display_name, definition.category);
    println!("  {}", definition.description);
    for (level, milestone) in definition.milestones.iter().enumerate() {
        let marker = if level == current as usize { ">" } else { " " };
        println!(
            "{} {}. {} [{} pts]",
            marker,
            level,
            milestone.summary,
            definition.points_at(level as u8)
        );
        for signal in &milestone.signals {
            println!("       - {}", signal);
        }
    }
}
