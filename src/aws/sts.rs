use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_sts::Client as StsClient;
use tracing::{debug, info};

use super::Credentials;
use crate::constants::DEFAULT_AWS_REGION;

/// Exchanges a role ARN for temporary credentials
#[allow(async_fn_in_trait)]
pub trait RoleAssumer {
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
        duration_seconds: i32,
    ) -> Result<Credentials>;
}

/// STS-backed `RoleAssumer` using the ambient AWS credential chain
#[derive(Debug, Clone)]
pub struct StsRoleAssumer {
    client: StsClient,
}

impl StsRoleAssumer {
    pub fn new(client: StsClient) -> Self {
        Self { client }
    }

    /// Build a client from the environment
    pub async fn from_env() -> Self {
        let config = load_sdk_config().await;
        Self::new(StsClient::new(&config))
    }
}

// Priority: ENV vars -> Config file -> EC2 metadata -> DEFAULT_AWS_REGION
async fn load_sdk_config() -> SdkConfig {
    let loaded = aws_config::defaults(BehaviorVersion::latest()).load().await;

    match loaded.region() {
        Some(region) => {
            info!("Using region: {}", region);
            loaded
        }
        None => {
            info!(
                "No region configured, using default {} for STS",
                DEFAULT_AWS_REGION
            );
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(DEFAULT_AWS_REGION))
                .load()
                .await
        }
    }
}

impl RoleAssumer for StsRoleAssumer {
    async fn assume_role(
        &self,
        role_arn: &str,
        session_name: &str,
        duration_seconds: i32,
    ) -> Result<Credentials> {
        info!("Calling AWS STS AssumeRole");
        debug!("Role ARN: {}", role_arn);
        debug!("Session name: {}", session_name);
        debug!("Duration: {} seconds", duration_seconds);

        let response = self
            .client
            .assume_role()
            .role_arn(role_arn)
            .role_session_name(session_name)
            .duration_seconds(duration_seconds)
            .send()
            .await
            .with_context(|| format!("Failed to assume role {role_arn}"))?;

        let sts_creds = response
            .credentials()
            .context("AWS STS returned no credentials")?;

        let credentials = Credentials {
            access_key_id: sts_creds.access_key_id().to_string(),
            secret_access_key: sts_creds.secret_access_key().to_string(),
            session_token: sts_creds.session_token().to_string(),
            expiration: *sts_creds.expiration(),
        };

        info!("Successfully obtained AWS credentials");
        Ok(credentials)
    }
}
