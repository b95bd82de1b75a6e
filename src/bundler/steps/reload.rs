//! Reload step - notifies a live-reload listener after development builds.
//!
//! Development builds talk to an extension-reload server listening on the
//! browser's reload port; production builds resolve to the inert variant.
//! A missing listener is not an error: the notification is best-effort.

use crate::bundler::{BuildMode, Result, Settings};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Message sent to the reload listener.
const RELOAD_MESSAGE: &[u8] = b"{\"type\":\"reload\",\"reloadPage\":true}\n";

/// How long to wait for the listener before giving up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// The reload slot of the step plan.
///
/// Always present in the plan; resolved per build to the active notifier
/// (development mode, browser with a reload port) or the inert no-op.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReloadStep {
    /// Notify the reload listener on this port.
    Active {
        /// Reload port of the selected browser.
        port: u16,
    },
    /// Do nothing.
    Inert,
}

impl ReloadStep {
    /// Resolves the reload slot for the given settings.
    pub fn for_settings(settings: &Settings) -> Self {
        match (settings.mode(), settings.reload_port()) {
            (BuildMode::Development, Some(port)) => Self::Active { port },
            _ => Self::Inert,
        }
    }

    /// Returns true for the active variant.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Sends the reload notification, if this slot is active.
    ///
    /// Connection failures are logged and swallowed; the extension-side
    /// listener is optional.
    pub async fn notify(&self) -> Result<()> {
        let Self::Active { port } = self else {
            return Ok(());
        };

        match tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(("127.0.0.1", *port))).await
        {
            Ok(Ok(mut stream)) => {
                stream.write_all(RELOAD_MESSAGE).await?;
                stream.flush().await?;
                log::info!("Notified reload listener on port {port}");
            }
            Ok(Err(e)) => {
                log::debug!("No reload listener on port {port}: {e}");
            }
            Err(_) => {
                log::debug!("Reload listener on port {port} timed out");
            }
        }

        Ok(())
    }
}
