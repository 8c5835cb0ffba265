use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::config::{self, InitOutcome};

#[derive(Debug, Clone, Args)]
pub struct InitCommand {}

impl InitCommand {
    pub async fn execute(self, config_path: &Path) -> Result<()> {
        let outcome = config::initialize(config_path).await?;
        println!("{}", message(outcome, config_path));
        Ok(())
    }
}

fn message(outcome: InitOutcome, config_path: &Path) -> String {
    match outcome {
        InitOutcome::Created => {
            format!("Configuration file created: {}", config_path.display())
        }
        InitOutcome::AlreadyExists => format!(
            "Configuration file already exists, left unchanged: {}",
            config_path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_message_created() {
        let msg = message(InitOutcome::Created, Path::new("/home/u/.aws/config.yaml"));
        assert_eq!(msg, "Configuration file created: /home/u/.aws/config.yaml");
    }

    #[test]
    fn test_message_already_exists_does_not_claim_creation() {
        let msg = message(
            InitOutcome::AlreadyExists,
            Path::new("/home/u/.aws/config.yaml"),
        );

        assert!(msg.contains("already exists"));
        assert!(msg.contains("/home/u/.aws/config.yaml"));
        assert!(!msg.to_lowercase().contains("created"));
    }

    #[tokio::test]
    async fn test_execute_keeps_existing_file_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        let existing = b"- profile: mine\n  name: me\n  assume_roles:\n    dev: arn:aws:iam::1:role/Dev\n";
        std::fs::write(&path, existing).unwrap();

        InitCommand {}.execute(&path).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), existing);
    }

    #[tokio::test]
    async fn test_execute_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".aws").join("config.yaml");

        InitCommand {}.execute(&path).await.unwrap();

        assert!(path.exists());
    }
}
