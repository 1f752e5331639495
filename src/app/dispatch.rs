use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use stylemind::composer::state::{ANALYZING_MESSAGE, GENERATING_MESSAGE};
use stylemind::ui::{render, style as ui};
use stylemind::{BackendClient, Config, DraftRequest, ImageAttachment, PostComposer, StyleProfile};
use tracing::info;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let backend = Arc::new(BackendClient::new(&config.api)?);
    info!(base_url = backend.base_url(), "using backend");

    match cli.command {
        Commands::Analyze { urls } => run_analyze(backend, &urls).await,

        Commands::Compose {
            urls,
            topic,
            image,
            out,
        } => run_compose(backend, &config, &urls, topic, &image, out.as_deref()).await,

        Commands::Interactive => super::interactive::run(backend, &config).await,

        Commands::Ping => {
            let message = backend
                .ping()
                .await
                .with_context(|| format!("backend at {} is not reachable", backend.base_url()))?;
            println!("{} {}", ui::success("✓"), message);
            Ok(())
        }
    }
}

async fn run_analyze(backend: Arc<BackendClient>, urls: &[String]) -> Result<()> {
    let mut composer = PostComposer::with_backend(backend);

    announce_analysis(urls);
    let profile = composer
        .request_style_analysis(urls)
        .await
        .context("style analysis failed")?;
    print_profile(profile);
    Ok(())
}

async fn run_compose(
    backend: Arc<BackendClient>,
    config: &Config,
    urls: &[String],
    topic: String,
    image_path: &str,
    out: Option<&Path>,
) -> Result<()> {
    // Check the image before spending a minute on analysis.
    let image = ImageAttachment::from_path(image_path, &config.media)
        .await
        .context("cannot use image")?;

    let mut composer = PostComposer::with_backend(backend);
    composer.set_topic(topic);
    composer.set_image(image);

    announce_analysis(urls);
    let profile = composer
        .request_style_analysis(urls)
        .await
        .context("style analysis failed")?
        .clone();
    print_profile(&profile);

    announce_generation(&composer);
    let post = composer
        .request_post_generation()
        .await
        .context("post generation failed")?
        .clone();

    let markdown = render::post_markdown(composer.topic(), &post);
    write_post(&markdown, out).await
}

pub(super) fn print_profile(profile: &StyleProfile) {
    eprintln!();
    eprintln!("  {}", ui::success("Style analysis complete"));
    for (label, value) in render::profile_lines(profile) {
        eprintln!("  {} {}", ui::cyan(format!("{label}:")), value);
    }
    eprintln!();
}

pub(super) async fn write_post(markdown: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            tokio::fs::write(path, markdown)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "  {} {}",
                ui::success("Post saved to"),
                ui::url(path.display())
            );
        }
        None => println!("{markdown}"),
    }
    Ok(())
}

// Stage lines are printed before the request is awaited. The composer's
// status channel coalesces updates, so a watcher task misses requests that
// fail before it is first polled.

pub(super) fn announce_analysis(urls: &[String]) {
    if analysis_will_run(urls) {
        eprintln!("  {}", ui::dim(ANALYZING_MESSAGE));
    }
}

pub(super) fn announce_generation(composer: &PostComposer) {
    if generation_will_run(composer) {
        eprintln!("  {}", ui::dim(GENERATING_MESSAGE));
    }
}

fn analysis_will_run(urls: &[String]) -> bool {
    urls.iter().any(|url| !url.trim().is_empty())
}

fn generation_will_run(composer: &PostComposer) -> bool {
    !composer.is_busy()
        && DraftRequest::assemble(composer.profile(), composer.image(), composer.topic()).is_ok()
}
