pub mod collector;
pub mod model;

pub use collector::Collector;
pub use model::{Code, Diagnostic, Severity};
