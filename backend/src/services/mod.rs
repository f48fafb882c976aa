//! Pure dashboard logic.
//!
//! Everything here is a function of the immutable [`Dataset`](crate::models::Dataset)
//! and a snapshot of the control values; nothing holds state between calls.

pub mod layout;
pub mod options;
pub mod payload_scatter;
pub mod success_pie;

pub use layout::build_layout;
pub use options::site_options;
pub use payload_scatter::payload_scatter_chart;
pub use success_pie::success_pie_chart;
