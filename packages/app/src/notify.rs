//! Notification sinks
//!
//! The engine never renders anything; celebration events are handed to a sink
//! chosen by the front end.

use strivex_algo::Notification;
use tokio::sync::broadcast;

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Logs every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        match notification {
            Notification::LevelUp {
                level,
                levels_gained,
            } => tracing::info!(level, levels_gained, "level up"),
            Notification::QuestComplete => tracing::info!("daily quest complete"),
        }
    }
}

/// Forwards notifications to any number of subscribers
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: broadcast::Sender<Notification>,
}

impl ChannelSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }
}

impl Default for ChannelSink {
    fn default() -> Self {
        Self::new(16)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: &Notification) {
        if self.sender.send(notification.clone()).is_err() {
            tracing::trace!("notification dropped, no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_delivers() {
        let sink = ChannelSink::default();
        let mut rx = sink.subscribe();
        sink.notify(&Notification::QuestComplete);
        assert_eq!(rx.try_recv().unwrap(), Notification::QuestComplete);
    }

    #[test]
    fn test_channel_sink_without_subscribers() {
        let sink = ChannelSink::default();
        sink.notify(&Notification::LevelUp {
            level: 2,
            levels_gained: 1,
        });
    }
}
