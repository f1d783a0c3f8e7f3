//! Keyboard layout domain module

mod pair;
mod table;

pub use pair::{LayoutId, LayoutPair};
pub use table::{LayoutTable, EN_RU};
