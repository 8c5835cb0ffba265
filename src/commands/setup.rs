use anyhow::{Context, Result};
use aws_smithy_types::date_time::Format;
use clap::Args;
use std::path::Path;
use tracing::info;

use crate::{
    aws::{self, Credentials, ResolvedRole, RoleAssumer, StsRoleAssumer},
    config,
    output::{self, ClipboardSink, SystemClipboard},
};

#[derive(Debug, Clone, Args)]
pub struct SetupCommand {
    #[arg(help = "Role alias to assume, as listed under assume_roles")]
    pub alias: String,
}

impl SetupCommand {
    pub async fn execute(self, config_path: &Path) -> Result<()> {
        info!("Setting up credentials for alias: {}", self.alias);

        let profiles = config::load(config_path).await?;
        let role = aws::roles::resolve(&profiles, &self.alias)?;

        info!(
            "Alias '{}' maps to {} in profile '{}'",
            role.alias, role.role_arn, role.profile
        );

        let assumer = StsRoleAssumer::from_env().await;
        let credentials = copy_credentials(&role, &assumer, &mut SystemClipboard).await?;

        println!("[{}] credentials have been copied!", role.alias);
        println!("Paste them into your shell to export them as environment variables.");
        println!(
            "Credentials will expire at: {}",
            credentials
                .expiration
                .fmt(Format::DateTime)
                .unwrap_or_else(|_| "unknown".to_string())
        );

        Ok(())
    }
}

/// Assume `role` and put the export statements on the clipboard
///
/// Nothing is copied unless the role assumption succeeds.
pub async fn copy_credentials<R, C>(
    role: &ResolvedRole,
    assumer: &R,
    sink: &mut C,
) -> Result<Credentials>
where
    R: RoleAssumer,
    C: ClipboardSink,
{
    let credentials = assumer
        .assume_role(&role.role_arn, &role.alias, role.duration_seconds)
        .await
        .context("Role switching failed")?;

    sink.copy(&output::render_exports(&credentials))?;

    Ok(credentials)
}
