//! Hashcat rule and companion dictionary export.
//!
//! The trailing `depth` chunks of a dictionary are encoded as literal-append
//! (`$c`) rules, one line per non-empty suffix combination in odometer order,
//! while the remaining prefix chunks are flattened into a companion
//! dictionary file that the loader can read back with the same separator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::chunk::ChunkSequence;
use crate::enumerate::Candidates;
use crate::error::{Error, Result};

fn validate_depth(sequence: &ChunkSequence, depth: usize) -> Result<()> {
    if depth == 0 || depth > sequence.len() {
        return Err(Error::InvalidDepth {
            depth,
            chunks: sequence.len(),
        });
    }
    Ok(())
}

/// Write the rule and dictionary streams for `sequence`.
///
/// The rule stream starts with the identity rule `:`, so downstream engines
/// also try dictionary entries unchanged. Suffix combinations composing to
/// the empty string add nothing beyond that identity rule and are skipped.
/// When `depth` equals the chunk count the dictionary stream stays empty and
/// the rules carry every combination.
///
/// Both writers are flushed before success is reported; a failed write aborts
/// the whole operation and leaves whatever was already written in place.
pub fn write_rules<R: Write, D: Write>(
    sequence: &ChunkSequence,
    separator: &str,
    depth: usize,
    mut rule_out: R,
    mut dict_out: D,
) -> Result<()> {
    validate_depth(sequence, depth)?;

    let (prefix, suffix) = sequence.chunks().split_at(sequence.len() - depth);

    writeln!(rule_out, ":")?;
    let mut emitted = 0usize;
    for combination in Candidates::new(suffix) {
        if combination.is_empty() {
            continue;
        }
        for ch in combination.chars() {
            write!(rule_out, "${ch}")?;
        }
        writeln!(rule_out)?;
        emitted += 1;
    }
    debug!("emitted {emitted} append rules at depth {depth}");

    // Separator lines between prefix chunks, not after the last one, so the
    // dictionary re-loads into the same chunk boundaries.
    for (position, chunk) in prefix.iter().enumerate() {
        for fragment in chunk.fragments() {
            if !fragment.is_empty() {
                writeln!(dict_out, "{fragment}")?;
            }
        }
        if position + 1 < prefix.len() {
            writeln!(dict_out, "{separator}")?;
        }
    }

    rule_out.flush()?;
    dict_out.flush()?;
    Ok(())
}

/// Create `<base>.rule` and `<base>.dict` and write them via [`write_rules`].
///
/// The depth is validated before either file is created.
pub fn generate(
    sequence: &ChunkSequence,
    separator: &str,
    depth: usize,
    base: &Path,
) -> Result<()> {
    validate_depth(sequence, depth)?;

    let rule_path = append_extension(base, ".rule");
    let dict_path = append_extension(base, ".dict");

    let rule_file = BufWriter::new(File::create(&rule_path)?);
    let dict_file = BufWriter::new(File::create(&dict_path)?);
    write_rules(sequence, separator, depth, rule_file, dict_file)?;

    info!(
        "wrote {} and {}",
        rule_path.display(),
        dict_path.display()
    );
    Ok(())
}

// Appends to the full file name rather than replacing an existing extension,
// so a base of "wordlists/v1.2" yields "wordlists/v1.2.rule".
fn append_extension(base: &Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(extension);
    PathBuf::from(name)
}
