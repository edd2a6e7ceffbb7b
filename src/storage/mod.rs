//! On-disk state: the pinned-items JSON file and the image directory.
//!
//! Both live under `<data dir>/Clipshelf` (on macOS,
//! `~/Library/Application Support/Clipshelf`).

pub mod images;
pub mod paths;
pub mod pinned;

pub use images::ImageStore;
pub use paths::AppPaths;
pub use pinned::PinnedStore;
