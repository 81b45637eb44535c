use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use skillhub_application::{AddSkillOutcome, ChannelNotifier, PageState, ProfilePage};
use skillhub_core::SkillhubError;
use skillhub_core::skill::{ProficiencyLevel, SkillDraft};

use crate::backend::Backend;
use crate::terminal::{self, TerminalNavigator};

/// Enters the profile page and prints it.
pub async fn show(offline: bool) -> Result<()> {
    let backend = Backend::connect(offline).await?;
    let (notifier, mut rx) = ChannelNotifier::channel();
    let page = ProfilePage::new(
        backend.auth(),
        backend.store(),
        Arc::new(notifier),
        Arc::new(TerminalNavigator::default()),
    );

    let state = page.enter().await;
    terminal::flush_notifications(&mut rx);
    if state != PageState::Ready {
        return not_signed_in();
    }

    terminal::print_profile(&page.view().await);
    Ok(())
}

/// Enters the profile page, submits one skill and prints the refreshed list.
pub async fn add_skill(
    offline: bool,
    title: String,
    description: String,
    level: ProficiencyLevel,
) -> Result<()> {
    let backend = Backend::connect(offline).await?;
    let (notifier, mut rx) = ChannelNotifier::channel();
    let page = ProfilePage::new(
        backend.auth(),
        backend.store(),
        Arc::new(notifier),
        Arc::new(TerminalNavigator::default()),
    );

    if page.enter().await != PageState::Ready {
        terminal::flush_notifications(&mut rx);
        return not_signed_in();
    }

    let outcome = page
        .add_skill(SkillDraft::new(title, description, level))
        .await;
    terminal::flush_notifications(&mut rx);

    match outcome {
        AddSkillOutcome::Added => {
            println!();
            terminal::print_profile(&page.view().await);
            Ok(())
        }
        AddSkillOutcome::Invalid(e) => bail!("{}", e),
        AddSkillOutcome::NoSession => not_signed_in(),
        AddSkillOutcome::AlreadyInFlight => {
            println!("{}", "A submission is already running".bright_black());
            Ok(())
        }
        AddSkillOutcome::Failed(e) => Err(e.into()),
    }
}

fn not_signed_in() -> Result<()> {
    Err(SkillhubError::Unauthenticated).context("Run `skillhub login` first")
}
