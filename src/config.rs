use crate::constants::{
    self, DEFAULT_ALIASES, DEFAULT_PROFILE_ID, DEFAULT_PROFILE_NAME,
    DEFAULT_SESSION_DURATION_SECONDS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, io::ErrorKind, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use tracing::{debug, info};

/// One named set of alias-to-role mappings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub profile: String,
    pub name: String,
    #[serde(default = "default_duration")]
    pub duration: i32,
    #[serde(deserialize_with = "null_as_empty")]
    pub assume_roles: BTreeMap<String, String>,
}

fn default_duration() -> i32 {
    DEFAULT_SESSION_DURATION_SECONDS
}

// `assume_roles:` with no entries and `assume_roles: ~` both mean "no aliases"
fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    /// Template profile written by `sw init`
    pub fn template() -> Self {
        Self {
            profile: DEFAULT_PROFILE_ID.to_string(),
            name: DEFAULT_PROFILE_NAME.to_string(),
            duration: DEFAULT_SESSION_DURATION_SECONDS,
            assume_roles: DEFAULT_ALIASES
                .iter()
                .map(|alias| (alias.to_string(), String::new()))
                .collect(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration contains no profiles")]
    NoProfiles,
    #[error("profile '{profile}' has invalid duration {duration}: must be a positive number of seconds")]
    InvalidDuration { profile: String, duration: i32 },
}

/// Result of `initialize`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
}

/// Write the template profile list to `path` unless a file is already there
pub async fn initialize(path: &Path) -> Result<InitOutcome> {
    if fs::try_exists(path).await.unwrap_or(false) {
        debug!("Configuration file already present: {}", path.display());
        return Ok(InitOutcome::AlreadyExists);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let yaml = serde_yaml::to_string(&vec![Profile::template()])
        .context("Failed to serialize default configuration")?;

    // create_new keeps a file written between the check above and here intact
    let mut file = match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
    {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(InitOutcome::AlreadyExists),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    };

    file.write_all(yaml.as_bytes())
        .await
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.flush().await?;

    info!("Wrote default configuration to {}", path.display());
    Ok(InitOutcome::Created)
}

/// Read and validate the profile list at `path`
pub async fn load(path: &Path) -> Result<Vec<Profile>> {
    let contents = fs::read_to_string(path).await.with_context(|| {
        format!(
            "Unable to read configuration file {}. Please run `sw init` first",
            path.display()
        )
    })?;

    let profiles = parse(&contents)
        .with_context(|| format!("Malformed configuration file {}", path.display()))?;

    debug!("Loaded {} profile(s) from {}", profiles.len(), path.display());
    Ok(profiles)
}

fn parse(contents: &str) -> Result<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_yaml::from_str(contents)?;
    validate(&profiles)?;
    Ok(profiles)
}

fn validate(profiles: &[Profile]) -> Result<(), ConfigError> {
    if profiles.is_empty() {
        return Err(ConfigError::NoProfiles);
    }

    if let Some(p) = profiles.iter().find(|p| p.duration <= 0) {
        return Err(ConfigError::InvalidDuration {
            profile: p.profile.clone(),
            duration: p.duration,
        });
    }

    Ok(())
}

/// Resolve the profile file location, preferring an explicit path
pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => constants::get_config_path().context("Failed to determine home directory"),
    }
}
