use beacon_common::PlatformError;
use tracing::{debug, info};

/// A native desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopAlert {
    pub app_name: String,
    pub title: String,
    pub body: String,
}

impl DesktopAlert {
    pub fn new(
        app_name: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Shows a native notification via `notify-rust`.
///
/// `on_click` runs when the user activates the notification. Only
/// freedesktop notification servers report activation; on macOS and Windows
/// the alert is shown and `on_click` is dropped unused.
pub fn notify<F>(alert: &DesktopAlert, on_click: F) -> Result<(), PlatformError>
where
    F: FnOnce() + Send + 'static,
{
    platform_notify(alert, on_click)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_notify<F>(alert: &DesktopAlert, on_click: F) -> Result<(), PlatformError>
where
    F: FnOnce() + Send + 'static,
{
    let handle = notify_rust::Notification::new()
        .appname(&alert.app_name)
        .summary(&alert.title)
        .body(&alert.body)
        .action("default", "Open")
        .show()
        .map_err(|e| PlatformError::NotificationError(format!("failed to show alert: {e}")))?;

    info!("native notification sent");

    // wait_for_action blocks until the alert is clicked or closed.
    std::thread::Builder::new()
        .name("alert-click".into())
        .spawn(move || {
            handle.wait_for_action(|action| match action {
                "default" => on_click(),
                "__closed" => debug!("notification closed without click"),
                other => debug!(action = %other, "unhandled notification action"),
            });
        })
        .map_err(|e| PlatformError::NotificationError(format!("failed to watch alert: {e}")))?;

    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn platform_notify<F>(alert: &DesktopAlert, _on_click: F) -> Result<(), PlatformError>
where
    F: FnOnce() + Send + 'static,
{
    notify_rust::Notification::new()
        .appname(&alert.app_name)
        .summary(&alert.title)
        .body(&alert.body)
        .show()
        .map(|_| ())
        .map_err(|e| PlatformError::NotificationError(format!("failed to show alert: {e}")))?;

    info!("native notification sent");
    debug!("click callbacks are not reported on this platform");
    Ok(())
}
