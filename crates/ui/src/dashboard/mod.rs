//! Central dashboard panel.
//!
//! Top to bottom:
//! - Title, subtitle and intro text
//! - Six metric cards in two rows of three
//! - The three baseline-vs-projection charts side by side
//! - One download button per chart, with a status line
//! - Additional information, attribution, partner logos and location

mod panels;
mod tests;
pub mod types;
mod ui_system;

pub use types::{metric_cards, MetricCard};
pub use ui_system::dashboard_ui;
