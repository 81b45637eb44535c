//! Notifier that forwards into a tokio channel.
//!
//! The presentation layer owns the receiving end and renders each message as
//! it arrives.

use skillhub_core::notification::{Notification, NotificationKind, Notifier};
use tokio::sync::mpsc;

pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<Notification>) -> Self {
        Self { sender }
    }

    /// Creates a notifier together with its receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("[Notify] {}", notification.message),
            NotificationKind::Error => tracing::warn!("[Notify] {}", notification.message),
        }
        // Non-blocking send - if the receiver is dropped, we just skip
        let _ = self.sender.send(notification);
    }
}
