//! Line pipelines
//!
//! Single-threaded, blocking encode and decode loops over a byte source and a
//! byte sink. Neither pipeline keeps state between lines beyond a counter.

mod decoder;
mod encoder;
mod reader;

pub use decoder::{Decoder, decode};
pub use encoder::{Encoder, encode};
pub use reader::fill;

/// Lines and payload bytes handled by a pipeline
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Text lines written (encode) or verified (decode)
    pub lines: usize,
    /// Raw payload bytes read (encode) or written (decode)
    pub bytes: u64,
}
