//! Upload tokenizing.

mod parser;
mod source;

pub use parser::{Parser, ParserConfig};
pub use source::{RawRow, RawTable, UploadMetadata};
