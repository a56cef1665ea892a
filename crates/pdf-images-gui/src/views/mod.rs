pub mod actions;
pub mod log_panel;
pub mod preview;
pub mod selection;
pub mod settings;

pub use preview::PreviewWindow;
