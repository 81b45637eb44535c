use std::sync::Arc;

use anyhow::{Result, bail};
use colored::Colorize;
use skillhub_application::{ChannelNotifier, SessionUseCase};

use crate::backend::Backend;
use crate::terminal::{self, TerminalNavigator};

pub async fn login(offline: bool, email: &str, password: &str) -> Result<()> {
    let backend = Backend::connect(offline).await?;
    let Backend::Remote { auth, .. } = &backend else {
        bail!("Offline mode is always signed in as the demo student.");
    };

    let identity = auth.sign_in_with_password(email, password).await?;
    println!(
        "{}",
        format!(
            "Signed in as {}",
            identity.email.as_deref().unwrap_or(&identity.id)
        )
        .green()
    );
    Ok(())
}

pub async fn logout(offline: bool) -> Result<()> {
    let backend = Backend::connect(offline).await?;
    let (notifier, mut rx) = ChannelNotifier::channel();
    let usecase = SessionUseCase::new(
        backend.auth(),
        Arc::new(notifier),
        Arc::new(TerminalNavigator::default()),
    );

    usecase.logout().await;
    terminal::flush_notifications(&mut rx);
    Ok(())
}
