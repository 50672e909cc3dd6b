pub mod context;
pub mod instruction;
pub mod parse;
pub mod read;

pub use context::{DocumentContext, LocalFs, PathProbe};
pub use instruction::Instruction;
pub use parse::parse_document;
pub use read::{DocumentSource, read_document};
