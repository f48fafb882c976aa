//! Serializable chart and layout types exchanged with the dashboard page.

pub mod chart;
pub mod layout;
pub mod pie;
pub mod scatter;
