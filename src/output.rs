use anyhow::{Context, Result};
use arboard::Clipboard;
use std::time::Instant;
use tracing::debug;

use crate::{aws::Credentials, constants::CLIPBOARD_HOLD_TIMEOUT};

/// Destination for the rendered export statements
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access the system clipboard")?;
        set_text(&mut clipboard, text).context("Failed to copy credentials to the clipboard")?;

        debug!("Copied {} bytes to the clipboard", text.len());
        Ok(())
    }
}

// X11/Wayland selections vanish with the owning process unless a clipboard
// manager takes them over before the deadline
#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    let deadline = hold_deadline(Instant::now());
    eprintln!(
        "Serving the clipboard for up to {}s, paste the exports now.",
        CLIPBOARD_HOLD_TIMEOUT.as_secs()
    );

    clipboard
        .set()
        .exclude_from_history()
        .wait_until(deadline)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn hold_deadline(now: Instant) -> Instant {
    now + CLIPBOARD_HOLD_TIMEOUT
}

/// Shell statements exporting `credentials` as the standard AWS variables
pub fn render_exports(credentials: &Credentials) -> String {
    format!(
        "export AWS_ACCESS_KEY_ID={}\nexport AWS_SECRET_ACCESS_KEY={}\nexport AWS_SESSION_TOKEN={}",
        credentials.access_key_id, credentials.secret_access_key, credentials.session_token
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_smithy_types::DateTime;
    use std::time::Duration;

    #[test]
    fn test_hold_deadline_is_bounded() {
        let now = Instant::now();
        let deadline = hold_deadline(now);

        assert!(deadline > now);
        assert!(deadline - now <= Duration::from_secs(60));
    }

    #[test]
    fn test_render_exports() {
        let credentials = Credentials {
            access_key_id: "ASIAEXAMPLE".to_string(),
            secret_access_key: "secret/key+value".to_string(),
            session_token: "token==".to_string(),
            expiration: DateTime::from_secs(0),
        };

        let rendered = render_exports(&credentials);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines,
            vec![
                "export AWS_ACCESS_KEY_ID=ASIAEXAMPLE",
                "export AWS_SECRET_ACCESS_KEY=secret/key+value",
                "export AWS_SESSION_TOKEN=token==",
            ]
        );
        assert!(!rendered.ends_with('\n'));
    }
}
