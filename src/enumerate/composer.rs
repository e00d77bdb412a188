use std::io::Write;

use crate::chunk::{Chunk, ChunkSequence};
use crate::enumerate::Odometer;
use crate::error::Result;

/// Concatenate the selected fragment of every chunk, in chunk order, with no
/// separator and no transformation.
///
/// # Panics
///
/// Panics if any selector is out of range for its chunk. Tuples produced by
/// [`Odometer`] over the same chunks are always in range.
pub fn compose(chunks: &[Chunk], indexes: &[usize]) -> String {
    debug_assert_eq!(chunks.len(), indexes.len());
    let mut candidate = String::new();
    for (chunk, &index) in chunks.iter().zip(indexes) {
        candidate.push_str(&chunk.fragments()[index]);
    }
    candidate
}

/// Lazy iterator over every candidate of a chunk slice, in odometer order.
pub struct Candidates<'a> {
    chunks: &'a [Chunk],
    odometer: Odometer,
}

impl<'a> Candidates<'a> {
    pub fn new(chunks: &'a [Chunk]) -> Self {
        let sizes = chunks.iter().map(Chunk::len).collect();
        Candidates {
            chunks,
            odometer: Odometer::new(sizes),
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.odometer
            .next()
            .map(|indexes| compose(self.chunks, &indexes))
    }
}

/// Write every candidate of `sequence`, one per line, in odometer order.
///
/// Emission order matches generation order exactly, and the writer is flushed
/// before success is reported.
pub fn write_candidates<W: Write>(sequence: &ChunkSequence, mut out: W) -> Result<()> {
    for candidate in Candidates::new(sequence.chunks()) {
        writeln!(out, "{candidate}")?;
    }
    out.flush()?;
    Ok(())
}
