use serde::{Deserialize, Serialize};

// =========================================================
// Pie chart types
// =========================================================

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

/// Pie chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    /// Column the slice labels come from
    pub names: String,
    /// Column (or derived count) the slice sizes come from
    pub values: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// Output id of the success pie chart.
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_total_and_lookup() {
        let chart = PieChart {
            title: "t".to_string(),
            names: "Launch Site".to_string(),
            values: "class".to_string(),
            slices: vec![
                PieSlice {
                    label: "A".to_string(),
                    value: 3,
                },
                PieSlice {
                    label: "B".to_string(),
                    value: 4,
                },
            ],
        };
        assert_eq!(chart.total(), 7);
        assert_eq!(chart.slice("B").map(|s| s.value), Some(4));
        assert!(chart.slice("C").is_none());
    }
}
