pub mod state;
pub mod workflow;

pub use state::{StateUpdate, Status, WorkflowEvent, WorkflowState};
pub use workflow::ClassificationWorkflow;
