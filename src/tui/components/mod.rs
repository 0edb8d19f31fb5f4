//! TUI components

mod clock_face;
mod help;
mod text_input;

pub use clock_face::ClockFaceWidget;
pub use help::HelpOverlay;
pub use text_input::{render_text_field, LABEL_WIDTH};
