//! Thread-safe event bus using mpsc channels.
//!
//! Any thread can publish through an `EventPublisher`; the main thread
//! collects with `EventBus::drain()`.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Multi-producer, single-consumer event queue.
///
/// # Example
///
/// ```
/// use clipshelf::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::TogglePopup);
///
/// let events = bus.drain();
/// assert_eq!(events, vec![AppEvent::TogglePopup]);
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Debug, Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event. Non-blocking; silently dropped once the receiver is
    /// gone (app shutting down).
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::CopySelection);
        publisher.publish(AppEvent::PasteIndex(2));
        publisher.publish(AppEvent::Quit);

        assert_eq!(
            bus.drain(),
            vec![AppEvent::CopySelection, AppEvent::PasteIndex(2), AppEvent::Quit]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::TogglePopup);
        publisher.publish(AppEvent::HidePopup);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_other_thread() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        std::thread::spawn(move || {
            publisher.publish(AppEvent::ReinstallEventTap);
        })
        .join()
        .unwrap();

        assert_eq!(bus.try_recv(), Some(AppEvent::ReinstallEventTap));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn test_publisher_clone_is_independent() {
        let bus = EventBus::new();
        let pub1 = bus.publisher();
        let pub2 = pub1.clone();

        pub1.publish(AppEvent::PermissionChanged(true));
        pub2.publish(AppEvent::RemoveRow(0));

        assert_eq!(bus.drain().len(), 2);
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::Quit);
    }
}
