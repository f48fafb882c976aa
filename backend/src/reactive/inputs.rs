//! Turning raw control values into a typed [`ControlState`] snapshot.

use serde_json::Value;
use std::collections::BTreeMap;

use super::error::{HandlerError, HandlerResult};
use crate::models::{ControlState, Dataset, PayloadRange, SiteSelection};
use crate::routes::layout::{PAYLOAD_SLIDER, SITE_DROPDOWN};

/// Raw control values keyed by component id, as sent by the page.
pub type InputValues = BTreeMap<String, Value>;

/// Build a snapshot from the supplied values. Controls that are not present
/// keep their initial value.
pub fn resolve_controls(dataset: &Dataset, inputs: &InputValues) -> HandlerResult<ControlState> {
    let mut state = ControlState::initial(dataset);

    for (id, value) in inputs {
        match id.as_str() {
            SITE_DROPDOWN => state.site = parse_site(value)?,
            PAYLOAD_SLIDER => state.payload_range = parse_range(value)?,
            other => return Err(HandlerError::UnknownInput(other.to_string())),
        }
    }

    Ok(state)
}

fn parse_site(value: &Value) -> HandlerResult<SiteSelection> {
    value
        .as_str()
        .map(SiteSelection::from)
        .ok_or_else(|| HandlerError::InvalidInput {
            input: SITE_DROPDOWN.to_string(),
            reason: format!("expected a site name, got {}", value),
        })
}

fn parse_range(value: &Value) -> HandlerResult<PayloadRange> {
    serde_json::from_value::<PayloadRange>(value.clone()).map_err(|e| HandlerError::InvalidInput {
        input: PAYLOAD_SLIDER.to_string(),
        reason: format!("expected [low, high], got {} ({})", value, e),
    })
}
