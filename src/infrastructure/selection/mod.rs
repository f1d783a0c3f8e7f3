//! Selection infrastructure module

mod wl_paste;

pub use wl_paste::WlPasteSelection;
