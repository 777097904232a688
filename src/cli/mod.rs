//! CLI command implementations

mod plan;
mod style;
mod submit;

pub use plan::PlanPrinter;
pub use submit::{SubmitOptions, run_auto, run_submit};
