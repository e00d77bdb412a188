use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::chunk::Chunk;
use crate::error::Result;

/// An immutable, ordered sequence of chunks — one whole dictionary.
///
/// Owned exclusively by the caller for the duration of one operation; there
/// is no shared or process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSequence {
    chunks: Vec<Chunk>,
}

impl ChunkSequence {
    /// Load a dictionary from a line stream.
    ///
    /// Lines byte-equal to `separator` delimit chunks; all other lines are
    /// fragment candidates, deduplicated per chunk. A separator always starts
    /// a new chunk, even when the previous one holds nothing but its implicit
    /// empty fragment, and an entirely empty stream still yields one such
    /// chunk. A read failure surfaces as [`Error::Io`](crate::Error::Io) with
    /// no partial result.
    pub fn from_reader<R: BufRead>(reader: R, separator: &str) -> Result<Self> {
        let mut chunks = Vec::new();
        let mut current = Chunk::new();

        for line in reader.lines() {
            let line = line?;
            if line == separator {
                chunks.push(std::mem::replace(&mut current, Chunk::new()));
            } else {
                current.push(line);
            }
        }
        chunks.push(current);

        debug!("loaded {} chunks from dictionary", chunks.len());
        Ok(ChunkSequence { chunks })
    }

    /// Open `path` and load it via [`ChunkSequence::from_reader`].
    pub fn from_path(path: &Path, separator: &str) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), separator)
    }

    /// Build a sequence directly from chunks.
    ///
    /// Intended for tests and embedders assembling chunks programmatically;
    /// the loader itself never produces an empty sequence.
    pub fn from_chunks(chunks: Vec<Chunk>) -> Self {
        ChunkSequence { chunks }
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk count.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Fragment count of every chunk, in chunk order.
    pub fn sizes(&self) -> Vec<usize> {
        self.chunks.iter().map(Chunk::len).collect()
    }
}
