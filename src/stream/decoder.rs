//! Decode pipeline: grouped lines in, verified bytes out
//!
//! One line is one step: strip separators, base32-decode, verify the
//! checksum, emit the payload. The first bad line stops everything.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use super::Summary;
use crate::protocol::{Error, IoOp, Result, decode_line};

/// Verifies lines and writes their payloads to a sink
#[derive(Debug)]
pub struct Decoder<W> {
    sink: W,
    summary: Summary,
}

impl<W: Write> Decoder<W> {
    /// Create a decoder writing to `sink`
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            summary: Summary::default(),
        }
    }

    /// Decode the next line (terminator already removed)
    ///
    /// Errors are tagged with the 1-based number of this line. Nothing is
    /// written for a rejected line.
    pub fn decode_line(&mut self, line: &[u8]) -> Result<()> {
        let line_no = self.summary.lines + 1;
        let payload = decode_line(line)
            .map_err(|e| e.at_line(line_no))?
            .into_payload();

        self.sink
            .write_all(&payload)
            .map_err(Error::io(IoOp::Write))?;

        self.summary.lines = line_no;
        self.summary.bytes += payload.len() as u64;
        debug!(line = line_no, len = payload.len(), "decoded line");
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

/// Decode every line of `source` into `sink`
///
/// Lines end with `\n` (a preceding `\r` is dropped too); a final line
/// without a terminator still counts. Payloads of lines decoded before an
/// error stay in the sink; on error a buffered sink is only flushed
/// best-effort when it is dropped.
#[instrument(skip_all)]
pub fn decode<R, W>(source: &mut R, sink: W) -> Result<Summary>
where
    R: BufRead + ?Sized,
    W: Write,
{
    let mut decoder = Decoder::new(sink);
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = source
            .read_until(b'\n', &mut line)
            .map_err(Error::io(IoOp::Read))?;
        if read == 0 {
            break;
        }
        decoder.decode_line(trim_terminator(&line))?;
    }

    let summary = decoder.finish()?;
    info!(lines = summary.lines, bytes = summary.bytes, "decode complete");
    Ok(summary)
}

fn trim_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
