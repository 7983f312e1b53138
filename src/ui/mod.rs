pub mod renderer;

#[cfg(windows)]
pub mod main_window;

#[cfg(windows)]
pub use main_window::{MainWindow, WindowError};
pub use renderer::{RendererError, SceneLayout, SceneRenderer};
