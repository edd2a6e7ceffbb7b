//! Process-wide access to the event bus.
//!
//! `init_event_bus()` runs once in `main`; afterwards any module (including
//! the event-tap callback, which has no Rust context of its own) can
//! `publish()`, and the dispatcher calls `drain_events()`.

use std::sync::{Mutex, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

/// Only the main thread drains, so the mutex is uncontended.
static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Initialize the global event bus.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_event_bus() {
    let bus = EventBus::new();

    PUBLISHER
        .set(bus.publisher())
        .expect("Event bus already initialized (publisher)");

    BUS.set(Mutex::new(bus))
        .expect("Event bus already initialized (bus)");
}

/// Whether `init_event_bus()` has run.
pub fn is_initialized() -> bool {
    PUBLISHER.get().is_some()
}

/// Get a publisher handle for the global event bus.
///
/// # Panics
///
/// Panics if `init_event_bus()` has not been called.
pub fn publisher() -> EventPublisher {
    PUBLISHER
        .get()
        .expect("Event bus not initialized - call init_event_bus() first")
        .clone()
}

/// Publish an event to the global bus. Events published before the bus
/// exists are logged and dropped.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => log::warn!("Event bus not initialized, dropping {:?}", event),
    }
}

/// Drain all pending events. Returns nothing if the bus is not initialized.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(bus) = BUS.get() else {
        return Vec::new();
    };
    match bus.lock() {
        Ok(guard) => guard.drain(),
        Err(poisoned) => poisoned.into_inner().drain(),
    }
}

#[cfg(test)]
mod tests {
    // The statics can only be set once per process, and unit tests share a
    // process. The whole lifecycle therefore runs in a single test.
    use super::*;

    #[test]
    fn test_global_bus_lifecycle() {
        if !is_initialized() {
            init_event_bus();
        }
        assert!(is_initialized());

        drain_events();
        publish(AppEvent::TogglePopup);
        publisher().publish(AppEvent::PasteIndex(0));

        assert_eq!(
            drain_events(),
            vec![AppEvent::TogglePopup, AppEvent::PasteIndex(0)]
        );
        assert!(drain_events().is_empty());
    }
}
