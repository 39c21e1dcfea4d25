//! Etl command implementation

use anyhow::{Context, Result};
use sp_db::Warehouse;
use sp_etl::{
    load_dataset, FileProcessor, LoadSummary, LogFileProcessor, Progress, SongFileProcessor,
};
use std::path::Path;

use crate::cli::{EtlArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the etl command
pub async fn execute(args: &EtlArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let db = ctx.db.as_ref();
    let extension = &ctx.config.datasets.extension;

    // Tables are created if missing so a fresh warehouse can be loaded directly
    sp_schema::create_tables(db)
        .await
        .context("Failed to prepare warehouse tables")?;

    if !args.logs_only {
        let root = ctx.config.song_data_absolute(&ctx.root);
        let processor = SongFileProcessor::new(ctx.config.songs.records);
        let summary = run_dataset(db, &root, extension, &processor, args.quiet).await?;
        println!(
            "Loaded {} song files: {} songs, {} artists",
            summary.files_processed, summary.stats.songs, summary.stats.artists
        );
    }

    if !args.songs_only {
        let root = ctx.config.log_data_absolute(&ctx.root);
        let summary = run_dataset(db, &root, extension, &LogFileProcessor, args.quiet).await?;
        println!(
            "Loaded {} log files: {} songplays ({} matched a song), {} other events skipped",
            summary.files_processed,
            summary.stats.songplays,
            summary.stats.matched_songplays,
            summary.stats.skipped_events
        );
    }

    Ok(())
}

async fn run_dataset<P: FileProcessor>(
    db: &dyn Warehouse,
    root: &Path,
    extension: &str,
    processor: &P,
    quiet: bool,
) -> Result<LoadSummary> {
    let mut report = |progress: Progress<'_>| {
        if quiet {
            return;
        }
        match progress {
            Progress::Discovered { root, total } => {
                println!("{} files found in {}", total, root.display())
            }
            Progress::Processed { index, total, .. } => {
                println!("{}/{} files processed.", index, total)
            }
        }
    };

    load_dataset(db, root, extension, processor, &mut report)
        .await
        .with_context(|| format!("Failed to load {}", processor.name()))
}
