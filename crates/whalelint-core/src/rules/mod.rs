pub mod catalog;
pub mod classify;
pub mod eval;
pub mod registry;

pub use eval::{LintContext, dispatch, evaluate_document};
pub use registry::Registry;
