//! Terminal rendering for pages, toasts and redirects.

use colored::Colorize;
use skillhub_application::ProfileViewModel;
use skillhub_core::navigation::{Navigator, Route};
use skillhub_core::notification::{Notification, NotificationKind};
use tokio::sync::mpsc::UnboundedReceiver;

/// Prints redirects instead of switching pages.
#[derive(Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!("[TerminalNavigator] -> {}", route.path());
        println!("{}", format!("-> {}", route.path()).bright_black());
    }
}

/// Prints every toast queued so far.
pub fn flush_notifications(rx: &mut UnboundedReceiver<Notification>) {
    while let Ok(notification) = rx.try_recv() {
        match notification.kind {
            NotificationKind::Success => println!("{}", notification.message.green()),
            NotificationKind::Error => eprintln!("{}", notification.message.red()),
        }
    }
}

pub fn print_profile(view: &ProfileViewModel) {
    match view.profile() {
        Some(profile) => {
            println!("{}", profile.full_name.bold());
            println!("{}", profile.headline());
            println!("{}", profile.class_of().bright_black());
            println!("{}", profile.email.bright_black());
            if !profile.bio.is_empty() {
                println!();
                println!("{}", profile.bio);
            }
            println!();
            println!("{} {}", "cover: ".bright_black(), profile.cover_image_url());
            println!("{} {}", "avatar:".bright_black(), profile.initials_avatar_url());
        }
        None => println!("{}", "(profile unavailable)".bright_black()),
    }

    println!();
    println!("{}", "Skills".bold());
    if view.skills().is_empty() {
        println!("{}", "  No skills yet".bright_black());
    }
    for skill in view.skills() {
        println!(
            "  {} {}",
            skill.title.bright_cyan(),
            format!("[{}]", skill.proficiency_level).yellow()
        );
        println!("    {}", skill.description);
        println!(
            "    {}",
            skill.created_at.format("%Y-%m-%d").to_string().bright_black()
        );
    }
}
