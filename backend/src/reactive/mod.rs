//! Reactive update pipeline.
//!
//! Control changes arrive as an [`UpdateRequest`]; the [`BindingTable`] names
//! the outputs that depend on the changed controls; each bound handler is a
//! pure function of the shared [`Dataset`](crate::models::Dataset) and a
//! [`ControlState`](crate::models::ControlState) snapshot, so concurrent
//! requests need no locking.
//!
//! ```text
//! UpdateRequest ─► resolve_controls ─► BindingTable::outputs_for ─► handlers ─► UpdateResponse
//! ```

pub mod binding;
pub mod cycle;
pub mod dashboard;
pub mod error;
pub mod inputs;

pub use binding::{Binding, BindingTable, HandlerFn};
pub use cycle::{UpdateCycle, UpdatePhase};
pub use dashboard::{Dashboard, UpdateRequest, UpdateResponse};
pub use error::{HandlerError, HandlerResult};
pub use inputs::{resolve_controls, InputValues};
