//! Byte source and byte sink
//!
//! Standard input/output when no path is given, otherwise the named file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::protocol::{Error, Result};

/// Open the byte source: `path` if given, standard input otherwise
pub fn open_source(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        None => Ok(Box::new(io::stdin().lock())),
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "opened input file");
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Open the byte sink: `path` (created or truncated) if given, standard output otherwise
pub fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Create {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "created output file");
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
