//! Desktop toast delivery, fire-and-forget.

use std::path::PathBuf;

use notify_rust::{Notification, Timeout};

use crate::{alert::Notice, prelude::*};

const APP_NAME: &str = "CarbuAlert";

/// Send the toast. Best-effort: a delivery failure is logged and never fails
/// the run.
#[instrument(skip_all, fields(title = notice.title))]
pub fn send(notice: &Notice) {
    let mut notification = Notification::new();
    notification
        .summary(notice.title)
        .body(&notice.body)
        .appname(APP_NAME)
        .timeout(Timeout::Milliseconds(
            u32::try_from(notice.timeout.as_millis()).unwrap_or(u32::MAX),
        ));
    if let Some(icon) = icon_path() {
        notification.icon(&icon.display().to_string());
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    notification.urgency(if notice.critical {
        notify_rust::Urgency::Critical
    } else {
        notify_rust::Urgency::Normal
    });
    if let Err(error) = notification.show() {
        error!(error = %format!("{error:#}"), "failed to deliver the notification");
    }
}

/// The application icon shipped next to the executable; `None` when it is not
/// installed there.
fn icon_path() -> Option<PathBuf> {
    let path = std::env::current_exe().ok()?.parent()?.join("icons").join("icon128.png");
    path.is_file().then_some(path)
}
