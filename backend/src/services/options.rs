use crate::models::{Dataset, ALL_SITES};
use crate::routes::layout::DropdownOption;

/// Label of the synthetic "every site" entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Dropdown entries: "All Sites" first, then one per distinct launch site in
/// first-occurrence order.
pub fn site_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(DropdownOption::new(ALL_SITES_LABEL, ALL_SITES))
        .chain(
            dataset
                .distinct_sites()
                .into_iter()
                .map(|site| DropdownOption::new(site, site)),
        )
        .collect()
}
