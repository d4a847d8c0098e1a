mod layout;
pub mod models;

pub use layout::{BoardLayouter, LayoutError, create_layout};
