//! Notification module for zhname
//!
//! Transient messages shown in the top-right corner: copy and export
//! confirmations, TTS problems and config warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
