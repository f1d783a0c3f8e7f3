//! Synthetic input infrastructure module

mod ydotool;

pub use ydotool::YdotoolInput;
