//! The dashboard: dataset, layout and bindings behind one handle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

use super::binding::{Binding, BindingTable};
use super::cycle::{UpdateCycle, UpdatePhase};
use super::error::{HandlerError, HandlerResult};
use super::inputs::{resolve_controls, InputValues};
use crate::models::{ControlState, Dataset};
use crate::routes::chart::{ChartSpec, RenderedChart};
use crate::routes::layout::{DashboardLayout, DropdownOption};
use crate::services::{build_layout, site_options};

/// A control change reported by the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Ids of the controls whose value changed. Empty means initial render.
    #[serde(default)]
    pub changed_inputs: Vec<String>,
    /// Current value of every control the page knows about.
    #[serde(default)]
    pub inputs: InputValues,
}

/// New chart specs keyed by output id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub outputs: BTreeMap<String, RenderedChart>,
}

/// Read-only dashboard shared by every request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    bindings: BindingTable,
    layout: DashboardLayout,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_bindings(dataset, BindingTable::standard())
    }

    pub fn with_bindings(dataset: Arc<Dataset>, bindings: BindingTable) -> Self {
        let layout = build_layout(&dataset);
        Self {
            dataset,
            bindings,
            layout,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn site_options(&self) -> Vec<DropdownOption> {
        site_options(&self.dataset)
    }

    pub fn initial_state(&self) -> ControlState {
        ControlState::initial(&self.dataset)
    }

    /// Run the handler bound to `output` against a control snapshot.
    pub fn render(&self, output: &str, state: &ControlState) -> HandlerResult<ChartSpec> {
        let binding = self.bindings.get(output).ok_or_else(|| {
            warn!(output, "render requested for unbound output");
            HandlerError::UnknownOutput(output.to_string())
        })?;
        Ok(binding.invoke(&self.dataset, state))
    }

    /// Process one control change through a full update cycle.
    pub fn update(&self, request: &UpdateRequest) -> HandlerResult<UpdateResponse> {
        let mut cycle = UpdateCycle::new();

        if let Some(unknown) = request
            .changed_inputs
            .iter()
            .find(|id| !self.bindings.is_input(id))
        {
            warn!(input = %unknown, "update triggered by unbound input");
            return Err(HandlerError::UnknownInput(unknown.clone()));
        }
        cycle.advance(UpdatePhase::Triggered)?;

        let state = resolve_controls(&self.dataset, &request.inputs)?;
        let targets: Vec<&Binding> = if request.changed_inputs.is_empty() {
            self.bindings.iter().collect()
        } else {
            self.bindings.outputs_for(request.changed_inputs.as_slice())
        };

        cycle.advance(UpdatePhase::Recomputing)?;
        let outputs = targets
            .into_iter()
            .map(|binding| {
                let chart = binding.invoke(&self.dataset, &state);
                (binding.output.to_string(), RenderedChart::from(chart))
            })
            .collect::<BTreeMap<_, _>>();

        cycle.advance(UpdatePhase::Rendered)?;
        debug!(
            changed = ?request.changed_inputs,
            site = %state.site,
            outputs = outputs.len(),
            "dashboard outputs recomputed"
        );
        cycle.advance(UpdatePhase::Idle)?;

        Ok(UpdateResponse { outputs })
    }
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod dashboard_tests;
