//! Text rendering of the profile forest.

pub mod text;
pub mod units;

pub use text::render_text_report;
