//! Encode pipeline: bytes in, grouped lines out

use std::io::{Read, Write};

use tracing::{debug, info, instrument};

use super::{Summary, fill};
use crate::protocol::{CHUNK_SIZE, Error, IoOp, Result, encode_line};

/// Writes one grouped line per chunk to a sink
#[derive(Debug)]
pub struct Encoder<W> {
    sink: W,
    summary: Summary,
}

impl<W: Write> Encoder<W> {
    /// Create an encoder writing to `sink`
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            summary: Summary::default(),
        }
    }

    /// Encode one chunk of `1..=CHUNK_SIZE` bytes and write its line
    pub fn encode_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        let mut line = encode_line(chunk).map_err(|e| e.at_line(self.summary.lines + 1))?;
        line.push('\n');
        self.sink
            .write_all(line.as_bytes())
            .map_err(Error::io(IoOp::Write))?;

        self.summary.lines += 1;
        self.summary.bytes += chunk.len() as u64;
        debug!(line = self.summary.lines, len = chunk.len(), "encoded chunk");
        Ok(())
    }

    /// Lines and bytes handled so far
    #[must_use]
    pub const fn summary(&self) -> Summary {
        self.summary
    }

    /// Flush the sink and return the final summary
    pub fn finish(mut self) -> Result<Summary> {
        self.sink.flush().map_err(Error::io(IoOp::Flush))?;
        Ok(self.summary)
    }
}

/// Encode everything readable from `source` into `sink`
///
/// Empty input produces no output at all. The first read or write error
/// stops the pipeline; lines already written stay in the sink.
#[instrument(skip_all)]
pub fn encode<R, W>(source: &mut R, sink: W) -> Result<Summary>
where
    R: Read + ?Sized,
    W: Write,
{
    let mut encoder = Encoder::new(sink);
    let mut buf = [0u8; CHUNK_SIZE];

    loop {
        let filled = fill(source, &mut buf).map_err(Error::io(IoOp::Read))?;
        if filled == 0 {
            break;
        }
        encoder.encode_chunk(&buf[..filled])?;
    }

    let summary = encoder.finish()?;
    info!(lines = summary.lines, bytes = summary.bytes, "encode complete");
    Ok(summary)
}
