//! Explicit dependency table: output id → handler → input ids.

use crate::models::{ControlState, Dataset};
use crate::routes::chart::ChartSpec;
use crate::routes::layout::{PAYLOAD_SLIDER, SITE_DROPDOWN};
use crate::routes::pie::SUCCESS_PIE_CHART;
use crate::routes::scatter::SUCCESS_PAYLOAD_SCATTER_CHART;
use crate::services::{payload_scatter_chart, success_pie_chart};

/// A chart handler. Pure: reads the dataset and a control snapshot only.
pub type HandlerFn = fn(&Dataset, &ControlState) -> ChartSpec;

/// One output placeholder wired to the controls it depends on.
#[derive(Debug, Clone)]
pub struct Binding {
    pub output: &'static str,
    pub inputs: &'static [&'static str],
    handler: HandlerFn,
}

impl Binding {
    pub const fn new(
        output: &'static str,
        inputs: &'static [&'static str],
        handler: HandlerFn,
    ) -> Self {
        Self {
            output,
            inputs,
            handler,
        }
    }

    pub fn depends_on(&self, input: &str) -> bool {
        self.inputs.contains(&input)
    }

    pub fn invoke(&self, dataset: &Dataset, state: &ControlState) -> ChartSpec {
        (self.handler)(dataset, state)
    }
}

fn pie_handler(dataset: &Dataset, state: &ControlState) -> ChartSpec {
    success_pie_chart(dataset, &state.site).into()
}

fn scatter_handler(dataset: &Dataset, state: &ControlState) -> ChartSpec {
    payload_scatter_chart(dataset, &state.site, state.payload_range).into()
}

#[derive(Debug, Clone)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// The dashboard's two bindings: the pie follows the dropdown, the
    /// scatter follows the dropdown and the slider.
    pub fn standard() -> Self {
        Self::new(vec![
            Binding::new(SUCCESS_PIE_CHART, &[SITE_DROPDOWN], pie_handler),
            Binding::new(
                SUCCESS_PAYLOAD_SCATTER_CHART,
                &[SITE_DROPDOWN, PAYLOAD_SLIDER],
                scatter_handler,
            ),
        ])
    }

    pub fn get(&self, output: &str) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.output == output)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    pub fn is_input(&self, id: &str) -> bool {
        self.bindings.iter().any(|b| b.depends_on(id))
    }

    /// Bindings affected by any of the changed inputs, in declaration order.
    pub fn outputs_for<S: AsRef<str>>(&self, changed: &[S]) -> Vec<&Binding> {
        self.bindings
            .iter()
            .filter(|b| changed.iter().any(|c| b.depends_on(c.as_ref())))
            .collect()
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::standard()
    }
}
