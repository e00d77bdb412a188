//! Password-candidate generation over chunked dictionaries.
//!
//! `sdic` reads a line-oriented dictionary split into chunks by a separator
//! line, then enumerates every combination of one fragment per chunk in a
//! deterministic mixed-radix order. The same enumeration drives three
//! operations: plain candidate listing, total combination counting, and
//! hashcat-compatible rule/dictionary export. All operations are
//! deterministic — identical inputs always produce identical outputs,
//! byte-for-byte and line-for-line.

pub mod chunk;
pub mod enumerate;
pub mod error;
pub mod rules;

pub use chunk::{Chunk, ChunkSequence};
pub use enumerate::{cardinality, compose, write_candidates, Candidates, Odometer};
pub use error::{Error, Result};
