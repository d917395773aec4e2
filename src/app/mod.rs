//! egui front end: application state, widgets and platform helpers.

pub mod fullscreen;
pub mod preferences;
pub mod selection;
mod state;
mod ui;

pub use fullscreen::{FullscreenBackend, FullscreenToggle, MaximizeFallback, NativeFullscreen};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore, THEME_KEY};
pub use selection::Selection;
pub use state::{App, AppWrapper};
