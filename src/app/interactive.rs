//! Prompt-driven version of the two-stage form.

use super::dispatch::{announce_analysis, announce_generation, print_profile, write_post};
use anyhow::Result;
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::sync::Arc;
use stylemind::ui::style as ui;
use stylemind::ui::render;
use stylemind::{BackendClient, ComposerError, Config, ImageAttachment, PostComposer};

pub async fn run(backend: Arc<BackendClient>, config: &Config) -> Result<()> {
    println!();
    println!("  {}", ui::header("StyleMind"));
    println!(
        "  {}",
        ui::dim("Learns your writing style, then drafts a post about a photo.")
    );
    println!();

    let mut composer = PostComposer::with_backend(backend);
    run_stages(&mut composer, config).await
}

/// How the user left the compose stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComposeExit {
    Done,
    Reanalyze,
}

async fn run_stages(composer: &mut PostComposer, config: &Config) -> Result<()> {
    loop {
        let analyzed = analyze_stage(composer).await?;
        if !can_compose(analyzed, composer.profile().is_some()) {
            return Ok(());
        }
        if compose_stage(composer, config).await? == ComposeExit::Done {
            return Ok(());
        }
    }
}

/// Giving up on a re-analysis keeps the profile that is already there.
fn can_compose(analyzed: bool, has_profile: bool) -> bool {
    analyzed || has_profile
}

/// Returns `false` when the user gives up without a new profile.
async fn analyze_stage(composer: &mut PostComposer) -> Result<bool> {
    println!("  {} {}", ui::accent("1."), ui::header("Analyze blog style"));

    loop {
        collect_urls(composer)?;

        announce_analysis(composer.urls().slots());
        match composer.analyze_current_urls().await {
            Ok(profile) => {
                print_profile(profile);
                return Ok(true);
            }
            Err(err) => {
                report(&err);
                if !err.is_validation() && !confirm("Try the analysis again?", true)? {
                    if composer.profile().is_some() {
                        println!("  {}", ui::dim("Keeping the previous style profile"));
                    }
                    return Ok(false);
                }
            }
        }
    }
}

fn collect_urls(composer: &mut PostComposer) -> Result<()> {
    let mut index = 0;
    loop {
        let current = composer.urls().slots()[index].clone();
        let url: String = Input::new()
            .with_prompt(format!("  Blog post URL #{}", index + 1))
            .allow_empty(true)
            .default(current)
            .show_default(false)
            .interact_text()?;
        composer.set_url(index, url.trim())?;

        index += 1;
        if index < composer.urls().len() {
            continue;
        }
        if !confirm("Add another URL?", false)? {
            return Ok(());
        }
        composer.add_url_slot();
    }
}

async fn compose_stage(composer: &mut PostComposer, config: &Config) -> Result<ComposeExit> {
    println!("  {} {}", ui::accent("2."), ui::header("Write a new post"));

    loop {
        let topic: String = Input::new()
            .with_prompt("  Topic")
            .allow_empty(true)
            .default(composer.topic().to_string())
            .show_default(!composer.topic().is_empty())
            .interact_text()?;
        composer.set_topic(topic);

        choose_image(composer, config).await?;

        announce_generation(composer);
        let outcome = composer.request_post_generation().await.cloned();
        match outcome {
            Ok(post) => {
                let markdown = render::post_markdown(composer.topic(), &post);
                println!();
                println!("{markdown}");
                offer_save(&markdown).await?;
                if !confirm("Write another post in this style?", false)? {
                    return leave_compose();
                }
            }
            Err(err) => {
                report(&err);
                if !err.is_validation() && !confirm("Try generating again?", true)? {
                    return leave_compose();
                }
            }
        }
    }
}

fn leave_compose() -> Result<ComposeExit> {
    if confirm("Re-analyze with different URLs?", false)? {
        Ok(ComposeExit::Reanalyze)
    } else {
        Ok(ComposeExit::Done)
    }
}

async fn choose_image(composer: &mut PostComposer, config: &Config) -> Result<()> {
    let current = composer
        .image()
        .map(|image| image.filename.clone())
        .unwrap_or_default();
    let path: String = Input::new()
        .with_prompt("  Image path")
        .allow_empty(true)
        .interact_text()?;

    let path = path.trim();
    if path.is_empty() {
        if !current.is_empty() {
            println!("  {}", ui::dim(format!("Keeping {current}")));
        }
        return Ok(());
    }

    match ImageAttachment::from_path(path, &config.media).await {
        Ok(image) => composer.set_image(image),
        Err(err) => {
            composer.clear_image();
            println!("  {}", ui::yellow(err));
        }
    }
    Ok(())
}

async fn offer_save(markdown: &str) -> Result<()> {
    let path: String = Input::new()
        .with_prompt("  Save to file (blank to skip)")
        .allow_empty(true)
        .interact_text()?;
    let path = path.trim();
    if path.is_empty() {
        return Ok(());
    }
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    write_post(markdown, Some(&expanded)).await
}

fn confirm(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("  {prompt}"))
        .default(default)
        .interact()?)
}

fn report(err: &ComposerError) {
    if err.is_validation() {
        println!("  {}", ui::yellow(err));
    } else {
        println!("  {} {}", ui::failure("✗"), err);
    }
}
