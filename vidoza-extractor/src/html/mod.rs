//! HTML matching for Vidoza embed pages.

pub mod parser;

pub use parser::find_stream_source;
