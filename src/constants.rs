use std::{env, path::PathBuf, time::Duration};

/// Directory under the user's home that holds the profile file
pub const CONFIG_DIR_NAME: &str = ".aws";

/// Profile file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable that overrides the profile file location
pub const CONFIG_FILE_ENV: &str = "SW_CONFIG_FILE";

/// Session duration written into the template profile, in seconds
pub const DEFAULT_SESSION_DURATION_SECONDS: i32 = 3600;

/// Profile identifier of the template profile
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Display name of the template profile
pub const DEFAULT_PROFILE_NAME: &str = "user";

/// Aliases written into the template profile, each with an empty role ARN
pub const DEFAULT_ALIASES: [&str; 4] = ["dev", "stg", "prod", "sbx"];

/// Default AWS region for STS operations when no region is configured
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

/// How long `sw setup` keeps serving the clipboard on Linux
pub const CLIPBOARD_HOLD_TIMEOUT: Duration = Duration::from_secs(30);

/// Get the profile file path
/// Respects SW_CONFIG_FILE environment variable if set
pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_FILE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_get_config_path_with_env() {
        let original = env::var(CONFIG_FILE_ENV).ok();

        unsafe {
            env::set_var(CONFIG_FILE_ENV, "/custom/sw/config.yaml");
        }
        let path = get_config_path();
        assert_eq!(path, Some(PathBuf::from("/custom/sw/config.yaml")));

        unsafe {
            match original {
                Some(val) => env::set_var(CONFIG_FILE_ENV, val),
                None => env::remove_var(CONFIG_FILE_ENV),
            }
        }
    }

    #[test]
    #[serial]
    fn test_get_config_path_default() {
        let original = env::var(CONFIG_FILE_ENV).ok();

        unsafe {
            env::remove_var(CONFIG_FILE_ENV);
        }
        let path = get_config_path();

        if let Some(p) = path {
            assert!(p.ends_with(PathBuf::from(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)));
        }

        unsafe {
            if let Some(val) = original {
                env::set_var(CONFIG_FILE_ENV, val);
            }
        }
    }

    #[test]
    #[serial]
    fn test_get_config_path_ignores_empty_env() {
        let original = env::var(CONFIG_FILE_ENV).ok();

        unsafe {
            env::set_var(CONFIG_FILE_ENV, "");
        }
        let path = get_config_path();

        if let Some(p) = path {
            assert!(p.to_string_lossy().contains(CONFIG_FILE_NAME));
        }

        unsafe {
            match original {
                Some(val) => env::set_var(CONFIG_FILE_ENV, val),
                None => env::remove_var(CONFIG_FILE_ENV),
            }
        }
    }
}
