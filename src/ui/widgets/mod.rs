// Custom widgets for the TUI

pub mod progress;
pub mod slider;

pub use progress::{BatchProgress, ProgressState};
pub use slider::Slider;
