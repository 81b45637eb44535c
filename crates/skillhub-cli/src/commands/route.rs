use anyhow::{Result, bail};
use skillhub_application::navigation::resolve_path;
use skillhub_core::session::SessionContext;

use crate::backend::Backend;

pub async fn show(offline: bool, path: &str) -> Result<()> {
    let backend = Backend::connect(offline).await?;
    let auth = backend.auth();
    let signed_in = match SessionContext::resolve(auth.as_ref()).await {
        Ok(session) => session.is_some(),
        Err(e) => {
            tracing::warn!("[route] Failed to resolve identity: {}", e);
            false
        }
    };

    let Some(route) = resolve_path(path, signed_in) else {
        bail!("No page at {}", path);
    };
    println!("{} -> {}", path, route.path());
    Ok(())
}
