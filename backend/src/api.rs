//! Public API surface of the dashboard.
//!
//! This file consolidates the DTO types exchanged with the page.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::ControlState;
pub use crate::models::DatasetSummary;
pub use crate::models::LaunchRecord;
pub use crate::models::OutcomeClass;
pub use crate::models::PayloadRange;
pub use crate::models::SiteSelection;
pub use crate::reactive::UpdateRequest;
pub use crate::reactive::UpdateResponse;
pub use crate::routes::chart::ChartSpec;
pub use crate::routes::chart::RenderedChart;
pub use crate::routes::layout::Component;
pub use crate::routes::layout::DashboardLayout;
pub use crate::routes::layout::DropdownOption;
pub use crate::routes::layout::TitleStyle;
pub use crate::routes::pie::PieChart;
pub use crate::routes::pie::PieSlice;
pub use crate::routes::scatter::ScatterChart;
pub use crate::routes::scatter::ScatterPoint;
