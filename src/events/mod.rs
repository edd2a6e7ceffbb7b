//! Event system for decoupled inter-module communication.
//!
//! ```text
//! ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐
//! │ Event tap  │  │ Status bar │  │   Popup    │  │  Pollers   │
//! │ (CGEvent)  │  │   menu     │  │  buttons   │  │ (NSTimer)  │
//! └─────┬──────┘  └─────┬──────┘  └─────┬──────┘  └─────┬──────┘
//!       │ publish()     │               │               │
//!       ▼               ▼               ▼               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     EventBus (mpsc)                         │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ drain()
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Dispatcher (main run loop timer)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: `AppEvent`
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access used by FFI callbacks

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, is_initialized, publish, publisher};
pub use types::AppEvent;
