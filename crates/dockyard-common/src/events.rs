use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Lifecycle events relayed from a dock to the embedding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DockEvent {
    TabAdded {
        tab_id: String,
        widget_id: Option<String>,
    },
    TabRemoved {
        tab_id: String,
        widget_id: Option<String>,
    },
    TabActivated {
        tab_id: Option<String>,
        widget_id: Option<String>,
    },
    LayoutRestored {
        panels: usize,
        widgets: usize,
    },
    Disposed,
    #[serde(other)]
    Unknown,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<DockEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DockEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: DockEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(DockEvent::Disposed);

        let event = rx.recv().await.unwrap();
        assert_eq!(event, DockEvent::Disposed);
    }

    #[tokio::test]
    async fn clones_share_the_channel() {
        let bus = EventBus::new(16);
        let relay = bus.clone();
        let mut rx = bus.subscribe();

        relay.publish(DockEvent::TabRemoved {
            tab_id: "tab-1".into(),
            widget_id: None,
        });

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, DockEvent::TabRemoved { ref tab_id, .. } if tab_id == "tab-1"));
    }

    #[tokio::test]
    async fn tab_events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(DockEvent::TabAdded {
            tab_id: "tab-1".into(),
            widget_id: Some("editor".into()),
        });
        bus.publish(DockEvent::TabActivated {
            tab_id: Some("tab-1".into()),
            widget_id: Some("editor".into()),
        });
        bus.publish(DockEvent::TabRemoved {
            tab_id: "tab-1".into(),
            widget_id: Some("editor".into()),
        });

        assert!(matches!(rx.recv().await.unwrap(), DockEvent::TabAdded { .. }));
        assert!(matches!(rx.recv().await.unwrap(), DockEvent::TabActivated { .. }));
        assert!(matches!(rx.recv().await.unwrap(), DockEvent::TabRemoved { .. }));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(DockEvent::Disposed), 0);
    }

    #[test]
    fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.publish(DockEvent::Disposed), 2);
    }

    #[test]
    fn event_wire_shape() {
        let event = DockEvent::TabActivated {
            tab_id: None,
            widget_id: None,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"TabActivated","data":{"tab_id":null,"widget_id":null}}"#
        );
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: DockEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, DockEvent::Unknown);
    }
}
