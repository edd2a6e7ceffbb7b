//! Main-thread runtime state.
//!
//! Everything the timers and action methods mutate lives here. Access goes
//! through [`with_state`]; never hold the borrow across a call that can run
//! the run loop (alerts, menus), since timers fire re-entrantly.

use std::cell::RefCell;

use crate::clipboard::{ChangeTracker, ClipboardManager};
use crate::model::AppConfig;
use crate::permission::PermissionMonitor;

pub struct AppState {
    pub manager: ClipboardManager,
    pub tracker: ChangeTracker,
    pub config: AppConfig,
    pub permission: PermissionMonitor,
    /// Change count when a Ctrl+C / Ctrl+X capture started.
    pub capture_start: Option<i64>,
    /// The missing-permission alert is shown at most once per run.
    pub permission_alert_shown: bool,
}

impl AppState {
    pub fn new(manager: ClipboardManager, config: AppConfig, change_count: i64) -> Self {
        Self {
            manager,
            tracker: ChangeTracker::starting_at(change_count),
            config,
            permission: PermissionMonitor::new(),
            capture_start: None,
            permission_alert_shown: false,
        }
    }
}

thread_local! {
    static STATE: RefCell<Option<AppState>> = const { RefCell::new(None) };
}

/// Install the state. Called once from `run()` before the run loop starts.
pub fn init_state(state: AppState) {
    STATE.with(|s| *s.borrow_mut() = Some(state));
}

/// Run `f` against the state. Returns `None` before `init_state`, or when
/// called re-entrantly while the state is already borrowed.
pub fn with_state<R>(f: impl FnOnce(&mut AppState) -> R) -> Option<R> {
    STATE.with(|s| match s.try_borrow_mut() {
        Ok(mut guard) => guard.as_mut().map(f),
        Err(_) => {
            log::warn!("App state is busy, skipping re-entrant access");
            None
        }
    })
}
