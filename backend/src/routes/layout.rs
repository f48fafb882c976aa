use serde::{Deserialize, Serialize};

// =========================================================
// Layout types
// =========================================================

/// Id of the launch site dropdown.
pub const SITE_DROPDOWN: &str = "site-dropdown";
/// Id of the payload range slider.
pub const PAYLOAD_SLIDER: &str = "payload-slider";

/// A selectable dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleStyle {
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

/// One widget of the page, in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    Graph {
        id: String,
    },
    Paragraph {
        text: String,
    },
    RangeSlider {
        id: String,
        min: f64,
        max: f64,
        step: f64,
        marks: Vec<f64>,
        value: [f64; 2],
    },
}

impl Component {
    pub fn id(&self) -> Option<&str> {
        match self {
            Component::Dropdown { id, .. }
            | Component::Graph { id }
            | Component::RangeSlider { id, .. } => Some(id.as_str()),
            Component::Paragraph { .. } => None,
        }
    }
}

/// Declarative description of the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub title_style: TitleStyle,
    pub components: Vec<Component>,
}

impl DashboardLayout {
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == Some(id))
    }
}
