use anyhow::Result;
use colored::Colorize;
use skillhub_core::config::BackendConfig;
use skillhub_infrastructure::{ConfigService, SkillhubPaths};

pub async fn save(url: String, anon_key: String, timeout_secs: Option<u64>) -> Result<()> {
    let mut backend = BackendConfig::new(url, anon_key);
    if let Some(secs) = timeout_secs {
        backend.request_timeout_secs = secs;
    }
    backend.validate()?;

    let service = ConfigService::new(&SkillhubPaths::default())?;
    service.save_backend(backend).await?;
    println!(
        "{}",
        format!("Saved backend config to {}", service.path().display()).green()
    );
    Ok(())
}
