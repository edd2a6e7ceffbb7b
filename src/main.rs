//! Clipshelf: clipboard history in the macOS menu bar.

#[cfg(target_os = "macos")]
mod macos_main;

fn main() {
    clipshelf::logging::init();

    // Initialize the global event bus before any producer can publish
    clipshelf::events::init_event_bus();

    #[cfg(target_os = "macos")]
    macos_main::run();

    #[cfg(not(target_os = "macos"))]
    {
        log::error!("Clipshelf only runs on macOS");
        std::process::exit(1);
    }
}
