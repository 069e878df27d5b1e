// ABOUTME: Entry point for the coco CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use coco::error::Result;
use coco::pull::{PullCoordinator, PullStatus, render};
use coco::{compose, engine, output};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ExtractImages {
            compose_file,
            output_file,
        } => extract_images(compose_file, output_file).await,
        Commands::PullImages { images_file } => pull_images(images_file).await,
    }
}

/// Extract the image list from a compose file and write it to disk.
async fn extract_images(compose_file: Option<PathBuf>, output_file: PathBuf) -> Result<()> {
    let compose_file = match compose_file {
        Some(path) => path,
        None => {
            let found = compose::discover(&env::current_dir()?)?;
            output::warn(&format!(
                "No compose file specified, using {}",
                found.display()
            ));
            found
        }
    };

    let engine = engine::locate()?;

    output::progress("Resolving compose configuration...");
    let document = compose::resolve(&engine, &compose_file).await?;
    let images = compose::ComposeDocument::from_yaml(&document)?.images();

    if images.is_empty() {
        output::warn("No images found in the compose file.");
        return Ok(());
    }

    compose::write_image_list(&output_file, &images)?;
    output::success(&format!(
        "{} image reference(s) extracted to {}",
        images.len(),
        output_file.display()
    ));
    Ok(())
}

/// Pull every image in the list concurrently behind a live status table.
async fn pull_images(images_file: PathBuf) -> Result<()> {
    let images = compose::read_image_list(&images_file)?;
    if images.is_empty() {
        output::warn("No images to pull.");
        return Ok(());
    }

    let engine = engine::locate()?;

    let mut coordinator = PullCoordinator::start(engine, images);
    render::run(&mut coordinator).await?;

    let failed: Vec<_> = coordinator
        .results()
        .into_iter()
        .filter(|record| record.status == PullStatus::Failed)
        .collect();

    if !failed.is_empty() {
        for record in &failed {
            if let Some(outcome) = &record.outcome {
                tracing::debug!(
                    image = %record.image,
                    code = outcome.exit_code,
                    stderr = %outcome.stderr.trim(),
                    "pull failed"
                );
            }
        }
        output::warn(&format!(
            "{} pull(s) failed; re-run with --verbose for details.",
            failed.len()
        ));
    }

    Ok(())
}
