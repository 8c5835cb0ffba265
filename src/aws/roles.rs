use thiserror::Error;

use crate::config::Profile;

/// Role selected for an alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRole {
    pub alias: String,
    pub profile: String,
    pub role_arn: String,
    pub duration_seconds: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("'{alias}' role not found in any profile")]
    NotFound { alias: String },
    /// The alias exists but only with an empty role ARN
    #[error("'{alias}' is listed in profile '{profile}' but has no role ARN set")]
    Unset { alias: String, profile: String },
}

/// Find the role ARN for `alias`
///
/// Profiles are scanned in order and the first non-empty ARN wins. An alias
/// that only appears with empty ARNs is reported as `Unset` against the first
/// profile that lists it, so the user knows which entry to fill in.
pub fn resolve(profiles: &[Profile], alias: &str) -> Result<ResolvedRole, ResolveError> {
    let mut unset_in: Option<&str> = None;

    for profile in profiles {
        let Some(arn) = profile.assume_roles.get(alias) else {
            continue;
        };

        let arn = arn.trim();
        if arn.is_empty() {
            unset_in = unset_in.or(Some(profile.profile.as_str()));
            continue;
        }

        return Ok(ResolvedRole {
            alias: alias.to_string(),
            profile: profile.profile.clone(),
            role_arn: arn.to_string(),
            duration_seconds: profile.duration,
        });
    }

    match unset_in {
        Some(profile) => Err(ResolveError::Unset {
            alias: alias.to_string(),
            profile: profile.to_string(),
        }),
        None => Err(ResolveError::NotFound {
            alias: alias.to_string(),
        }),
    }
}
