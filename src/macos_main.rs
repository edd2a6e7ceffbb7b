//! macOS entry point: builds the controller, status item and timers, then
//! hands control to the AppKit run loop.

use clipshelf::model::constants::APP_DIR_NAME;
use clipshelf::platform::macos::app::actions::poll_permission;
use clipshelf::platform::macos::app::helpers::perform_after_delay;
use clipshelf::platform::macos::app::{create_controller, init_state, start_timers, AppState};
use clipshelf::platform::macos::ffi::bridge::{autoreleasepool, msg_send, sel, NSApp};
use clipshelf::platform::macos::ffi::request_accessibility_prompt;
use clipshelf::platform::macos::input::{install_termination_observer, install_wake_observers};
use clipshelf::platform::macos::pasteboard::change_count;
use clipshelf::platform::macos::storage::load_config;
use clipshelf::platform::macos::ui::install_status_bar;
use clipshelf::storage::AppPaths;
use clipshelf::ClipboardManager;

/// Delay before the first-launch login item question.
const LAUNCH_PROMPT_DELAY_SECS: f64 = 1.0;

fn app_paths() -> AppPaths {
    match AppPaths::default_location() {
        Ok(paths) => paths,
        Err(e) => {
            let fallback = std::env::temp_dir().join(APP_DIR_NAME);
            log::error!("{}; keeping data in {}", e, fallback.display());
            AppPaths::in_dir(fallback)
        }
    }
}

/// Main entry point for macOS.
pub fn run() {
    // Event bus is already initialized by main()

    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1
        let _: bool = msg_send![app, setActivationPolicy: 1isize];

        let config = load_config();
        log::debug!("Configuration: {:?}", config);

        let paths = app_paths();
        log::info!("Data directory: {}", paths.root.display());
        let manager = ClipboardManager::load(&paths, config.history_limit);

        let poll_interval = config.poll_interval_secs;
        let permission_interval = config.permission_poll_secs;
        init_state(AppState::new(manager, config, change_count()));

        // Ask for Accessibility permission (shows a system prompt if needed)
        if request_accessibility_prompt() {
            log::info!("Accessibility access already granted");
        }

        let controller = create_controller();
        install_status_bar(controller);
        install_termination_observer();
        install_wake_observers();

        // The first poll publishes the initial trust state; the dispatcher
        // installs the key listener or shows the explanation from there.
        poll_permission();
        start_timers(controller, poll_interval, permission_interval);
        perform_after_delay(controller, sel!(promptLaunchAtLogin), LAUNCH_PROMPT_DELAY_SECS);

        log::info!("Clipshelf running");
        let _: () = msg_send![app, run];
    });
}
